use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Registry entry for one salt (derived by POOL_RECORD_SEED + salt).
///
/// A populated record means the salt is taken.
#[account]
#[derive(Default, Debug)]
pub struct PoolRecord {
    pub bump: u8,
    pub salt: [u8; 32],
    /// Pool address created for `salt`.
    pub pool: Pubkey,
    /// Creation order within the registry.
    pub index: u64,
    pub reward_rate_bps: u64,
    pub lock_duration_seconds: u64,
    pub created_at: i64,
}

impl PoolRecord {
    pub const LEN: usize = 8 + 1 + 32 + 32 + 8 * 4;

    pub fn is_populated(&self) -> bool {
        self.pool != Pubkey::default()
    }

    /// Fails with `DuplicateSalt` when the salt already has a pool, either on
    /// record here or as an account at the predicted address.
    pub fn ensure_vacant(&self, pool_account_empty: bool) -> Result<()> {
        require!(
            pool_account_empty && !self.is_populated(),
            ErrorCode::DuplicateSalt
        );
        Ok(())
    }

    /// Takes the salt for `pool`.
    #[allow(clippy::too_many_arguments)]
    pub fn populate(
        &mut self,
        bump: u8,
        salt: [u8; 32],
        pool: Pubkey,
        index: u64,
        reward_rate_bps: u64,
        lock_duration_seconds: u64,
        created_at: i64,
    ) {
        self.bump = bump;
        self.salt = salt;
        self.pool = pool;
        self.index = index;
        self.reward_rate_bps = reward_rate_bps;
        self.lock_duration_seconds = lock_duration_seconds;
        self.created_at = created_at;
    }
}
