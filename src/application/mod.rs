// Application layer - Store, presenter and dashboard use cases
pub mod dashboard_service;
pub mod dataset_source;
pub mod presenter;
pub mod store;
