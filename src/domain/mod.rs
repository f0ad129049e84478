// Domain layer - Records, range selection, metrics and view model
pub mod dashboard;
pub mod group;
pub mod metric;
pub mod range;
pub mod record;
pub mod state;
