pub mod math;
pub use math::*;

pub mod token;
pub use token::*;
