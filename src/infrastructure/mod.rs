// Infrastructure layer - Configuration, dataset sources and HTTP encoding
pub mod config;
pub mod csv_source;
pub mod http_response;
