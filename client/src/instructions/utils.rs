use anchor_lang::AccountDeserialize;
use anyhow::{format_err, Result};
use plexus_pool::states::Pool;
use plexus_registry::states::RegistryConfig;
use rand::Rng;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{account::Account, pubkey::Pubkey};

pub fn deserialize_anchor_account<T: AccountDeserialize>(account: &Account) -> Result<T> {
    let mut data: &[u8] = &account.data;
    T::try_deserialize(&mut data).map_err(Into::into)
}

pub fn fetch_pool(rpc_client: &RpcClient, pool: &Pubkey) -> Result<Pool> {
    let account = rpc_client.get_account(pool)?;
    deserialize_anchor_account::<Pool>(&account)
}

pub fn fetch_registry_config(rpc_client: &RpcClient) -> Result<RegistryConfig> {
    let account = rpc_client.get_account(&plexus_registry::registry_config_address().0)?;
    deserialize_anchor_account::<RegistryConfig>(&account)
}

/// Token program owning `mint` (SPL Token or Token-2022).
pub fn get_token_program(rpc_client: &RpcClient, mint: &Pubkey) -> Result<Pubkey> {
    Ok(rpc_client.get_account(mint)?.owner)
}

/// Parses a 32-byte hex salt, left-aligned and zero padded like `0x7465737431`.
pub fn parse_salt(s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s.trim_start_matches("0x"))?;
    if bytes.len() > 32 {
        return Err(format_err!("salt longer than 32 bytes: {}", s));
    }
    let mut salt = [0u8; 32];
    salt[..bytes.len()].copy_from_slice(&bytes);
    Ok(salt)
}

pub fn random_salt() -> [u8; 32] {
    rand::rng().random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_left_aligned() {
        let salt = parse_salt("0x7465737431").unwrap();
        assert_eq!(&salt[..5], b"test1");
        assert!(salt[5..].iter().all(|b| *b == 0));
    }

    #[test]
    fn oversized_salt_is_rejected() {
        assert!(parse_salt(&"ab".repeat(33)).is_err());
    }
}
