use crate::error::ErrorCode;
use crate::states::{Pool, RewardFunded, RewardLedger};
use crate::utils::{ensure_balance, transfer_from_user_to_pool_vault};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `fund`.
#[derive(Accounts)]
pub struct Fund<'info> {
    /// Registry authority PDA recorded on the pool.
    pub registry_authority: Signer<'info>,

    /// Owner of the reward tokens; signs the outer transaction.
    pub funder: Signer<'info>,

    #[account(
        mut,
        has_one = token_mint @ ErrorCode::InvalidMint,
        has_one = reward_vault @ ErrorCode::InvalidVault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(mut)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Funder's token account the reward is pulled from.
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = funder,
    )]
    pub funder_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Adds `amount` to the pool's reward budget.
///
/// Steps:
/// 1. Require the signer to be the pool's registry (`InvalidRegistry`).
/// 2. Check the funder covers `amount` (`TransferFailed`).
/// 3. Credit the ledger (`ZeroAmount` for an empty credit).
/// 4. Pull the tokens into the reward vault.
/// 5. Emit `RewardFunded`.
pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    ctx.accounts
        .pool
        .authorize_funding(&ctx.accounts.registry_authority.key())?;
    ensure_balance(ctx.accounts.funder_token.amount, amount)?;

    let pool = &mut ctx.accounts.pool;
    pool.credit_reward(amount)?;
    let funded_balance = pool.reward_balance();
    let pool_key = pool.key();

    transfer_from_user_to_pool_vault(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_token.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    #[cfg(feature = "enable-log")]
    msg!("fund: amount {} balance {}", amount, funded_balance);

    emit!(RewardFunded {
        pool: pool_key,
        amount,
        funded_balance,
    });

    Ok(())
}
