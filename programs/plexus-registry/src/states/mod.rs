pub mod registry_config;
pub use registry_config::*;

pub mod pool_record;
pub use pool_record::*;

pub mod events;
pub use events::*;
