pub mod math;
pub use math::*;

pub mod distribution;
pub use distribution::*;
