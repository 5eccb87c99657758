pub mod initialize_registry;
pub use initialize_registry::*;

pub mod create_pool;
pub use create_pool::*;

pub mod predict_address;
pub use predict_address::*;

pub mod deposit_reward;
pub use deposit_reward::*;

pub mod pool_reward_balance;
pub use pool_reward_balance::*;
