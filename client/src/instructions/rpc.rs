use anchor_lang::AnchorDeserialize;
use anyhow::{format_err, Result};
use base64::Engine;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature, transaction::Transaction};
use solana_transaction_status::UiReturnDataEncoding;

/// Upper bound on the encoded size of any view's return value.
const MAX_VIEW_LEN: usize = 64;

pub fn send_txn(client: &RpcClient, txn: &Transaction, wait_confirm: bool) -> Result<Signature> {
    Ok(client.send_and_confirm_transaction_with_spinner_and_config(
        txn,
        if wait_confirm {
            CommitmentConfig::confirmed()
        } else {
            CommitmentConfig::processed()
        },
        RpcSendTransactionConfig {
            skip_preflight: true,
            ..RpcSendTransactionConfig::default()
        },
    )?)
}

/// Simulates `txn` and decodes the program's return data as `T`.
///
/// View instructions (`get_stake`, `pool_reward_balance`, ...) answer through
/// return data, so reading them costs no fee.
pub fn simulate_view<T: AnchorDeserialize>(client: &RpcClient, txn: &Transaction) -> Result<T> {
    let result = client.simulate_transaction(txn)?.value;
    if let Some(err) = result.err {
        for log in result.logs.unwrap_or_default() {
            println!("{}", log);
        }
        return Err(format_err!("simulation failed: {:?}", err));
    }
    // The runtime drops trailing zero bytes of return data, and all of it
    // when the value is zero.
    let mut bytes = match result.return_data {
        Some(return_data) => {
            let (data, encoding) = return_data.data;
            if encoding != UiReturnDataEncoding::Base64 {
                return Err(format_err!("unexpected return data encoding {:?}", encoding));
            }
            base64::engine::general_purpose::STANDARD.decode(data)?
        }
        None => Vec::new(),
    };
    bytes.resize(bytes.len().max(MAX_VIEW_LEN), 0);
    Ok(T::deserialize(&mut &bytes[..])?)
}
