pub mod snapshot;
pub mod trend;
