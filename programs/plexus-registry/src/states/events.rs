use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to follow the registry
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the registry is bound to its mint.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RegistryInitialized {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    /// PDA that signs pool creation and funding.
    pub registry_authority: Pubkey,
}

/// Emitted for every pool the registry instantiates.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub salt: [u8; 32],
    pub index: u64,
    pub reward_rate_bps: u64,
    pub lock_duration_seconds: u64,
}

/// Emitted per pool credited by `deposit_reward`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardDistributed {
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub weight_bps: u16,
    pub amount: u64,
}
