use crate::error::ErrorCode;
use crate::states::{RegistryConfig, RegistryInitialized};
use crate::{REGISTRY_AUTH_SEED, REGISTRY_CONFIG_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

/// Accounts context for `initialize_registry`.
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Admin signer (must match the program-level admin id).
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub admin: Signer<'info>,

    #[account(
        init,
        seeds = [REGISTRY_CONFIG_SEED.as_bytes()],
        bump,
        payer = admin,
        space = RegistryConfig::LEN
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Registry authority PDA; signs CPIs into the pool program.
    ///
    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [REGISTRY_AUTH_SEED.as_bytes()],
        bump,
    )]
    pub registry_authority: UncheckedAccount<'info>,

    /// Mint every pool of this registry stakes and rewards.
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    pub system_program: Program<'info, System>,
}

/// Creates the registry singleton bound to `token_mint`.
pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry_config = &mut ctx.accounts.registry_config;
    registry_config.bump = ctx.bumps.registry_config;
    registry_config.authority_bump = ctx.bumps.registry_authority;
    registry_config.token_mint = ctx.accounts.token_mint.key();

    msg!("Registry initialized");

    emit!(RegistryInitialized {
        admin: ctx.accounts.admin.key(),
        token_mint: registry_config.token_mint,
        registry_authority: ctx.accounts.registry_authority.key(),
    });

    Ok(())
}
