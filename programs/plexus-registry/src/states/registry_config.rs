use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Registry Config
// ──────────────────────────────────────────────────────────────────────────────
//

/// Singleton registry state (derived by REGISTRY_CONFIG_SEED).
///
/// Binds the registry to one token mint: every pool it creates stakes and
/// pays out that mint.
#[account]
#[derive(Default, Debug)]
pub struct RegistryConfig {
    pub bump: u8,

    /// Bump of the registry authority PDA that signs pool CPIs.
    pub authority_bump: u8,

    pub token_mint: Pubkey,

    /// Pools created so far; also the index of the next pool.
    pub pool_count: u64,

    /// Cumulative reward moved into pools.
    pub total_distributed: u64,
}

impl RegistryConfig {
    /// 8 discriminator + 2 bumps + mint + 2 counters.
    pub const LEN: usize = 8 + 1 + 1 + 32 + 8 * 2;

    /// Reserves the next pool index.
    pub fn next_pool_index(&mut self) -> Result<u64> {
        let index = self.pool_count;
        self.pool_count = index.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(index)
    }

    pub fn record_distribution(&mut self, amount: u64) -> Result<()> {
        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_indices_are_sequential() {
        let mut config = RegistryConfig::default();
        assert_eq!(config.next_pool_index().unwrap(), 0);
        assert_eq!(config.next_pool_index().unwrap(), 1);
        assert_eq!(config.pool_count, 2);
    }

    #[test]
    fn distribution_overflow_is_rejected() {
        let mut config = RegistryConfig {
            total_distributed: u64::MAX,
            ..Default::default()
        };
        assert_eq!(
            config.record_distribution(1).unwrap_err(),
            ErrorCode::MathOverflow.into()
        );
        assert_eq!(config.total_distributed, u64::MAX);
    }

    #[test]
    fn account_len_fits_serialized_config() {
        let mut data = Vec::new();
        RegistryConfig::default().try_serialize(&mut data).unwrap();
        assert_eq!(RegistryConfig::LEN, data.len());
    }
}
