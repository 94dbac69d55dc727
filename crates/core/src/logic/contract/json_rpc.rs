use crate::prelude::*;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct Receipt {
    status: Option<String>,
    #[serde(rename = "blockNumber")]
    block_number: Option<String>,
}

/// [`BatchPayContract`] over a plain Ethereum JSON-RPC endpoint.
#[derive(Debug, Clone, Getters)]
pub struct JsonRpcBatchPay {
    http: Client,

    #[getset(get = "pub")]
    rpc_url: Url,

    #[getset(get = "pub")]
    contract_address: EthAccountId,
}

impl JsonRpcBatchPay {
    pub fn new(rpc_url: Url, contract_address: EthAccountId) -> Result<Self, ContractError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ContractError::Transport {
                method: "client".to_owned(),
                underlying: e.to_debug_string(),
            })?;
        Ok(Self {
            http,
            rpc_url,
            contract_address,
        })
    }

    pub fn from_parameters(parameters: &BatchPayParameters) -> Result<Self, ContractError> {
        Self::new(
            parameters.rpc_url().clone(),
            *parameters.contract_address(),
        )
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, ContractError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        debug!("JSON-RPC request {method} to {}", self.rpc_url);

        let transport = |e: reqwest::Error| ContractError::Transport {
            method: method.to_owned(),
            underlying: e.to_debug_string(),
        };
        let response: RpcResponse = self
            .http
            .post(self.rpc_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)?;

        if let Some(error) = response.error {
            return Err(ContractError::Rejected {
                method: method.to_owned(),
                code: error.code,
                message: error.message,
            });
        }
        Ok(response.result)
    }

    fn unexpected(method: &str, underlying: impl std::fmt::Display) -> ContractError {
        ContractError::UnexpectedResponse {
            method: method.to_owned(),
            underlying: underlying.to_string(),
        }
    }
}

/// Parses a `0x` prefixed hex quantity.
fn parse_quantity(text: &str) -> Option<u64> {
    let digits = text.strip_prefix("0x")?;
    u64::from_str_radix(digits, 16).ok()
}

impl BatchPayContract for JsonRpcBatchPay {
    async fn chain_id(&self) -> Result<u64, ContractError> {
        const METHOD: &str = "eth_chainId";
        let result = self.call(METHOD, json!([])).await?;
        result
            .as_str()
            .and_then(parse_quantity)
            .ok_or_else(|| Self::unexpected(METHOD, result))
    }

    async fn send_batch(&self, from: EthAccountId, call: &BatchPayCall) -> Result<TxHash, ContractError> {
        const METHOD: &str = "eth_sendTransaction";
        let transaction = json!({
            "from": from,
            "to": self.contract_address,
            "data": format!("0x{}", hex::encode(call.calldata())),
            "value": format!("0x{:x}", call.value()),
        });
        info!(
            "Sending batch of {} payments from {from}, value {} wei",
            call.len(),
            call.value()
        );
        let result = self.call(METHOD, json!([transaction])).await?;
        result
            .as_str()
            .and_then(|s| s.parse::<TxHash>().ok())
            .ok_or_else(|| Self::unexpected(METHOD, result))
    }

    async fn transaction_status(
        &self,
        tx_hash: &TxHash,
    ) -> Result<Option<TransactionStatus>, ContractError> {
        const METHOD: &str = "eth_getTransactionReceipt";
        let result = self.call(METHOD, json!([tx_hash])).await?;
        if result.is_null() {
            return Ok(None);
        }
        let receipt: Receipt =
            serde_json::from_value(result).map_err(|e| Self::unexpected(METHOD, e))?;
        let Some(block_number) = receipt.block_number.as_deref().and_then(parse_quantity) else {
            return Ok(None);
        };
        let status = match receipt.status.as_deref() {
            Some("0x1") => TransactionStatus::Confirmed { block_number },
            _ => TransactionStatus::Reverted { block_number },
        };
        Ok(Some(status))
    }

    async fn payment_history(&self, payer: EthAccountId) -> Result<Vec<PaymentBatch>, ContractError> {
        const METHOD: &str = "eth_call";
        let request = json!({
            "to": self.contract_address,
            "data": format!("0x{}", hex::encode(get_payment_history_calldata(payer))),
        });
        let result = self.call(METHOD, json!([request, "latest"])).await?;
        let encoded = result
            .as_str()
            .ok_or_else(|| Self::unexpected(METHOD, &result))?;
        let bytes = hex::decode(encoded.trim_start_matches("0x")).map_err(|e| {
            AbiError::InvalidHex {
                underlying: e.to_string(),
            }
        })?;
        Ok(decode_payment_history(&bytes)?)
    }
}
