use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to follow pool activity
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the registry creates a pool.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolInitialized {
    /// Pool PDA.
    pub pool: Pubkey,
    /// Salt the address was derived from.
    pub salt: [u8; 32],
    /// Registry authority that created and funds the pool.
    pub registry: Pubkey,
    /// Staked and reward mint.
    pub token_mint: Pubkey,
    pub reward_rate_bps: u64,
    pub lock_duration_seconds: u64,
}

/// Emitted when the registry adds to a pool's reward budget.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardFunded {
    pub pool: Pubkey,
    /// Amount credited by this call.
    pub amount: u64,
    /// Budget available after the credit.
    pub funded_balance: u64,
}

/// Emitted on every successful deposit.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Deposited {
    pub pool: Pubkey,
    pub owner: Pubkey,
    /// Principal added by this call.
    pub amount: u64,
    /// Principal after the deposit.
    pub principal: u64,
    /// Reward banked on the previous principal.
    pub accrued: u64,
    pub timestamp: i64,
}

/// Emitted when a participant takes out their whole principal.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub owner: Pubkey,
    /// Principal returned.
    pub amount: u64,
    /// Reward banked by the withdrawal.
    pub accrued: u64,
    pub timestamp: i64,
}

/// Emitted when banked reward is paid out.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardClaimed {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    /// Budget left in the pool after the payout.
    pub funded_balance: u64,
}
