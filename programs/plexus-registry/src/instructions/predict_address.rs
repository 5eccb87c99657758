use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PredictAddress {}

/// Address `create_pool` will use for `salt`. Never fails.
pub fn predict_address(_ctx: Context<PredictAddress>, salt: [u8; 32]) -> Result<Pubkey> {
    Ok(crate::predict_pool_address(&salt))
}
