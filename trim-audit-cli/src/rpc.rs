//! HTTP Ledger Client
//!
//! `LedgerRpc` transport over a node's REST surface:
//!
//! - `GET {base}/api/v1/ledger/height`
//! - `GET {base}/api/v1/ledger/block/{height}` (404 when past the tip)
//! - `GET {base}/api/v1/ledger/utxo/{tx_hash}/{index}` (`utxo: null` when absent)
//!
//! Connectivity loss and unexpected statuses map to `RpcError::Transport`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use lib_audit::{LedgerRpc, RpcError};
use lib_types::{Block, BlockHeight, OutPoint, Utxo};

/// HTTP implementation of `LedgerRpc`
#[derive(Debug, Clone)]
pub struct HttpLedgerClient {
    base: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct HeightResponse {
    status: String,
    height: BlockHeight,
}

#[derive(Debug, Deserialize)]
struct BlockResponse {
    status: String,
    block: Block,
}

#[derive(Debug, Deserialize)]
struct UtxoResponse {
    status: String,
    utxo: Option<Utxo>,
}

impl HttpLedgerClient {
    /// Create a client for a node address such as `http://127.0.0.1:9001`.
    pub fn new(address: &str) -> Self {
        Self {
            base: format!("{}/api/v1/ledger", address.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }
}

fn transport(err: reqwest::Error) -> RpcError {
    RpcError::Transport(err.to_string())
}

fn check_status(status: &str) -> Result<(), RpcError> {
    if status == "ok" {
        Ok(())
    } else {
        Err(RpcError::Transport(format!(
            "node reported status {:?}",
            status
        )))
    }
}

#[async_trait]
impl LedgerRpc for HttpLedgerClient {
    async fn current_height(&self) -> Result<BlockHeight, RpcError> {
        let response = self
            .client
            .get(format!("{}/height", self.base))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(RpcError::Transport(format!(
                "height request failed: {}",
                response.status()
            )));
        }
        let body: HeightResponse = response.json().await.map_err(transport)?;
        check_status(&body.status)?;
        Ok(body.height)
    }

    async fn block_by_height(&self, height: BlockHeight) -> Result<Block, RpcError> {
        let response = self
            .client
            .get(format!("{}/block/{}", self.base, height))
            .send()
            .await
            .map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RpcError::NotFound);
        }
        if !response.status().is_success() {
            return Err(RpcError::Transport(format!(
                "block request failed: {}",
                response.status()
            )));
        }
        let body: BlockResponse = response.json().await.map_err(transport)?;
        check_status(&body.status)?;
        Ok(body.block)
    }

    async fn utxo_at(&self, outpoint: OutPoint) -> Result<Option<Utxo>, RpcError> {
        let response = self
            .client
            .get(format!(
                "{}/utxo/{}/{}",
                self.base, outpoint.tx_hash, outpoint.output_index
            ))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(RpcError::Transport(format!(
                "utxo request failed: {}",
                response.status()
            )));
        }
        let body: UtxoResponse = response.json().await.map_err(transport)?;
        check_status(&body.status)?;
        Ok(body.utxo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = HttpLedgerClient::new("http://127.0.0.1:9001/");
        assert_eq!(client.base, "http://127.0.0.1:9001/api/v1/ledger");
    }

    #[test]
    fn height_response_parses() {
        let body: HeightResponse =
            serde_json::from_str(r#"{"status":"ok","height":424242}"#).unwrap();
        assert_eq!(body.height, 424242);
        assert!(check_status(&body.status).is_ok());
    }

    #[test]
    fn absent_utxo_parses_as_none() {
        let body: UtxoResponse = serde_json::from_str(r#"{"status":"ok","utxo":null}"#).unwrap();
        assert!(body.utxo.is_none());
    }

    #[test]
    fn block_response_parses() {
        let raw = format!(
            r#"{{"status":"ok","block":{{"height":7,"transactions":[{{
                "hash":{hash},
                "kind":"coinbase",
                "destination_scope":"ledger",
                "value":1000,
                "lockup_byte":1
            }}]}}}}"#,
            hash = serde_json::to_string(&[0u8; 32].to_vec()).unwrap()
        );
        let body: BlockResponse = serde_json::from_str(&raw).unwrap();
        assert_eq!(body.block.height, 7);
        assert_eq!(body.block.transactions.len(), 1);
        assert_eq!(body.block.transactions[0].value, 1000);
    }

    #[test]
    fn bad_node_status_is_a_transport_error() {
        assert!(matches!(
            check_status("degraded"),
            Err(RpcError::Transport(_))
        ));
    }
}
