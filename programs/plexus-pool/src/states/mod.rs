pub mod pool;
pub use pool::*;

pub mod events;
pub use events::*;

pub mod stake;
pub use stake::*;
