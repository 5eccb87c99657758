use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "plexus-pool",
    project_url: "https://github.com/plexus-finance/plexus-staking",
    contacts: "email:security@plexus.finance",
    policy: "https://github.com/plexus-finance/plexus-staking/blob/main/SECURITY.md",
    source_code: "https://github.com/plexus-finance/plexus-staking"
}

declare_id!("DtdEPwP1Cr9WQTo44gKuG1bv2vAYSACY4nuxoPSJwz2S");

/// Registry program allowed to create and fund pools.
pub mod plexus_registry {
    use anchor_lang::prelude::declare_id;
    declare_id!("5BaeB6n5EH8BMbcQQXzS2VXLsbN7WpjwCvsJUXjveTMk");
}

pub const POOL_SEED: &str = "pool";
pub const STAKE_SEED: &str = "stake";
pub const STAKE_VAULT_SEED: &str = "stake_vault";
pub const REWARD_VAULT_SEED: &str = "reward_vault";
/// Seed of the registry PDA that signs `initialize_pool` and `fund`.
pub const REGISTRY_AUTH_SEED: &str = "registry_authority";

pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;
use states::StakeView;

/// Derives the pool address for `salt`.
///
/// Pure function of the pool program id and the salt; the registry uses the
/// same derivation to predict addresses before a pool exists.
pub fn pool_address(salt: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED.as_bytes(), salt.as_ref()], &crate::ID)
}

/// The registry PDA that alone may create and fund pools.
pub fn registry_authority_address() -> Pubkey {
    Pubkey::find_program_address(
        &[REGISTRY_AUTH_SEED.as_bytes()],
        &crate::plexus_registry::id(),
    )
    .0
}

pub fn stake_address(pool: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STAKE_SEED.as_bytes(), pool.as_ref(), owner.as_ref()],
        &crate::ID,
    )
}

pub fn stake_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_VAULT_SEED.as_bytes(), pool.as_ref()], &crate::ID)
}

pub fn reward_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARD_VAULT_SEED.as_bytes(), pool.as_ref()], &crate::ID)
}

#[program]
pub mod plexus_pool {

    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        salt: [u8; 32],
        reward_rate_bps: u64,
        lock_duration_seconds: u64,
    ) -> Result<()> {
        instructions::initialize_pool(ctx, salt, reward_rate_bps, lock_duration_seconds)
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund(ctx, amount)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }

    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward(ctx)
    }

    pub fn reward_balance_available(ctx: Context<RewardBalanceAvailable>) -> Result<u64> {
        instructions::reward_balance_available(ctx)
    }

    pub fn get_stake(ctx: Context<GetStake>, owner: Pubkey) -> Result<StakeView> {
        instructions::get_stake(ctx, owner)
    }
}
