pub mod initialize_pool;
pub use initialize_pool::*;

pub mod fund;
pub use fund::*;

pub mod deposit;
pub use deposit::*;

pub mod withdraw;
pub use withdraw::*;

pub mod claim_reward;
pub use claim_reward::*;

pub mod reward_balance_available;
pub use reward_balance_available::*;

pub mod get_stake;
pub use get_stake::*;
