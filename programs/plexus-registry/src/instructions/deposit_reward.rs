use crate::error::ErrorCode;
use crate::states::{RegistryConfig, RewardDistributed};
use crate::utils::{plan_distribution, SuppliedTarget};
use crate::{REGISTRY_AUTH_SEED, REGISTRY_CONFIG_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use plexus_pool::program::PlexusPool;
use plexus_pool::states::Pool;

/// Accounts context for `deposit_reward`.
///
/// Target pools follow in `remaining_accounts` as `[pool, reward_vault]`
/// pairs, in the order of `pool_ids`.
#[derive(Accounts)]
pub struct DepositReward<'info> {
    /// Owner of the reward budget being distributed.
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_CONFIG_SEED.as_bytes()],
        bump = registry_config.bump,
    )]
    pub registry_config: Box<Account<'info, RegistryConfig>>,

    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [REGISTRY_AUTH_SEED.as_bytes()],
        bump = registry_config.authority_bump,
    )]
    pub registry_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = funder,
    )]
    pub funder_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = registry_config.token_mint @ ErrorCode::InvalidMint)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub pool_program: Program<'info, PlexusPool>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Splits `total_amount` across `pool_ids` by `weights_bps` and funds each pool.
///
/// Steps:
/// 1. Load the `[pool, reward_vault]` pairs from `remaining_accounts`.
/// 2. Plan the distribution: arguments, targets and funder balance are all
///    checked here, before the first transfer.
/// 3. CPI `plexus_pool::fund` for each non-zero share.
/// 4. Book the total and emit `RewardDistributed` per pool.
pub fn deposit_reward<'info>(
    ctx: Context<'_, '_, 'info, 'info, DepositReward<'info>>,
    total_amount: u64,
    pool_ids: Vec<Pubkey>,
    weights_bps: Vec<u16>,
) -> Result<()> {
    // --- 1) Targets ---
    let pairs: Vec<&'info [AccountInfo<'info>]> = ctx
        .remaining_accounts
        .chunks_exact(2)
        .take(pool_ids.len())
        .collect();
    let pools: Vec<Option<Pool>> = pairs
        .iter()
        .map(|pair| {
            Account::<Pool>::try_from(&pair[0])
                .ok()
                .map(Account::into_inner)
        })
        .collect();
    let supplied: Vec<SuppliedTarget> = pairs
        .iter()
        .zip(&pools)
        .map(|(pair, pool)| SuppliedTarget {
            pool_key: pair[0].key(),
            pool: pool.as_ref(),
            reward_vault_key: pair[1].key(),
        })
        .collect();

    // --- 2) Plan ---
    let plan = plan_distribution(
        total_amount,
        &pool_ids,
        &weights_bps,
        &supplied,
        &ctx.accounts.registry_authority.key(),
        &ctx.accounts.registry_config.token_mint,
        ctx.accounts.funder_token.amount,
    )?;

    // --- 3) Fan out ---
    let authority_bump = ctx.accounts.registry_config.authority_bump;
    let signer_seeds: &[&[&[u8]]] = &[&[REGISTRY_AUTH_SEED.as_bytes(), &[authority_bump]]];
    for (pair, share) in pairs.iter().zip(&plan.shares) {
        if *share == 0 {
            continue;
        }
        plexus_pool::cpi::fund(
            CpiContext::new_with_signer(
                ctx.accounts.pool_program.to_account_info(),
                plexus_pool::cpi::accounts::Fund {
                    registry_authority: ctx.accounts.registry_authority.to_account_info(),
                    funder: ctx.accounts.funder.to_account_info(),
                    pool: pair[0].clone(),
                    reward_vault: pair[1].clone(),
                    funder_token: ctx.accounts.funder_token.to_account_info(),
                    token_mint: ctx.accounts.token_mint.to_account_info(),
                    token_program: ctx.accounts.token_program.to_account_info(),
                },
                signer_seeds,
            ),
            *share,
        )?;

        #[cfg(feature = "enable-log")]
        msg!("deposit_reward: pool {} share {}", pair[0].key(), share);
    }

    // --- 4) Bookkeeping ---
    ctx.accounts
        .registry_config
        .record_distribution(plan.distributed)?;
    let funder = ctx.accounts.funder.key();
    for ((pair, share), weight_bps) in pairs.iter().zip(&plan.shares).zip(&weights_bps) {
        emit!(RewardDistributed {
            pool: pair[0].key(),
            funder,
            weight_bps: *weight_bps,
            amount: *share,
        });
    }

    Ok(())
}
