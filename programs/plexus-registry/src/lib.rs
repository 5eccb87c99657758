use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "plexus-registry",
    project_url: "https://github.com/plexus-finance/plexus-staking",
    contacts: "email:security@plexus.finance",
    policy: "https://github.com/plexus-finance/plexus-staking/blob/main/SECURITY.md",
    source_code: "https://github.com/plexus-finance/plexus-staking"
}

declare_id!("5BaeB6n5EH8BMbcQQXzS2VXLsbN7WpjwCvsJUXjveTMk");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("FyWrj6N6sAgLmaQfsuHJ7zZY3oVBurxudZ8RRMGvQA5U");
}

pub const REGISTRY_CONFIG_SEED: &str = "registry_config";
pub const POOL_RECORD_SEED: &str = "pool_record";
pub use plexus_pool::REGISTRY_AUTH_SEED;

pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

/// Address the pool for `salt` has, or will have once created.
///
/// Depends only on the pool program id and the salt.
pub fn predict_pool_address(salt: &[u8; 32]) -> Pubkey {
    plexus_pool::pool_address(salt).0
}

pub fn registry_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_CONFIG_SEED.as_bytes()], &crate::ID)
}

pub fn registry_authority_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_AUTH_SEED.as_bytes()], &crate::ID)
}

pub fn pool_record_address(salt: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_RECORD_SEED.as_bytes(), salt.as_ref()], &crate::ID)
}

#[program]
pub mod plexus_registry {

    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    pub fn create_pool(
        ctx: Context<CreatePool>,
        reward_rate_bps: u64,
        lock_duration_seconds: u64,
        salt: [u8; 32],
    ) -> Result<Pubkey> {
        instructions::create_pool(ctx, reward_rate_bps, lock_duration_seconds, salt)
    }

    pub fn predict_address(ctx: Context<PredictAddress>, salt: [u8; 32]) -> Result<Pubkey> {
        instructions::predict_address(ctx, salt)
    }

    pub fn deposit_reward<'info>(
        ctx: Context<'_, '_, 'info, 'info, DepositReward<'info>>,
        total_amount: u64,
        pool_ids: Vec<Pubkey>,
        weights_bps: Vec<u16>,
    ) -> Result<()> {
        instructions::deposit_reward(ctx, total_amount, pool_ids, weights_bps)
    }

    pub fn pool_reward_balance(ctx: Context<PoolRewardBalance>) -> Result<u64> {
        instructions::pool_reward_balance(ctx)
    }
}
