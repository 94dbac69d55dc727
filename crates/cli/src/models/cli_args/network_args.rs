use crate::prelude::*;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
pub struct NetworkArgs {
    /// Network the contract lives on: `base` or `base-sepolia`.
    #[arg(long, default_value = "base-sepolia")]
    pub chain: String,

    /// JSON-RPC endpoint, defaults to the public endpoint of `--chain`.
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Address of the `BatchPay` contract.
    #[arg(long, default_value_t = DEFAULT_CONTRACT_ADDRESS.to_owned())]
    pub contract: String,
}

/// Network arguments plus the settings only some commands have.
#[derive(Debug)]
pub struct NetworkRequest {
    pub network: NetworkArgs,
    pub sender: Option<String>,
    pub receipt_poll_interval: Option<Duration>,
    pub max_receipt_polls: Option<usize>,
}

impl TryFrom<NetworkRequest> for BatchPayParameters {
    type Error = InvalidCliArgs;

    fn try_from(request: NetworkRequest) -> Result<Self, Self::Error> {
        let NetworkRequest {
            network,
            sender,
            receipt_poll_interval,
            max_receipt_polls,
        } = request;
        let chain = network.chain.parse::<Chain>()?;

        let raw_url = network
            .rpc_url
            .unwrap_or_else(|| chain.default_rpc_url().to_owned());
        let Ok(rpc_url) = Url::parse(&raw_url) else {
            return Err(InvalidCliArgs::RpcUrlInvalid { bad_value: raw_url });
        };

        let contract_address = network
            .contract
            .parse::<EthAccountId>()
            .map_err(InvalidCliArgs::ContractAddressInvalid)?;
        let sender = sender
            .map(|s| s.parse::<EthAccountId>())
            .transpose()
            .map_err(InvalidCliArgs::SenderAddressInvalid)?;

        Ok(BatchPayParameters::builder()
            .rpc_url(rpc_url)
            .chain(chain)
            .contract_address(contract_address)
            .maybe_sender(sender)
            .maybe_receipt_poll_interval(receipt_poll_interval)
            .maybe_max_receipt_polls(max_receipt_polls)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(chain: &str, rpc_url: Option<&str>) -> NetworkArgs {
        NetworkArgs {
            chain: chain.to_owned(),
            rpc_url: rpc_url.map(str::to_owned),
            contract: DEFAULT_CONTRACT_ADDRESS.to_owned(),
        }
    }

    fn parameters(
        network: NetworkArgs,
        sender: Option<&str>,
    ) -> Result<BatchPayParameters, InvalidCliArgs> {
        BatchPayParameters::try_from(NetworkRequest {
            network,
            sender: sender.map(str::to_owned),
            receipt_poll_interval: None,
            max_receipt_polls: None,
        })
    }

    #[test]
    fn defaults_to_public_endpoint_of_chain() {
        let parameters = parameters(network("base", None), None).unwrap();
        assert_eq!(*parameters.chain(), Chain::Base);
        assert_eq!(parameters.rpc_url().as_str(), "https://mainnet.base.org/");
        assert_eq!(*parameters.sender(), None);
        assert_eq!(
            *parameters.contract_address(),
            DEFAULT_CONTRACT_ADDRESS.parse().unwrap()
        );
    }

    #[test]
    fn explicit_url_and_sender() {
        let parameters = parameters(
            network("base-sepolia", Some("http://localhost:8545")),
            Some("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
        )
        .unwrap();
        assert_eq!(parameters.rpc_url().as_str(), "http://localhost:8545/");
        assert!(parameters.sender().is_some());
        assert_eq!(*parameters.receipt_poll_interval(), DEFAULT_RECEIPT_POLL_INTERVAL);
        assert_eq!(*parameters.max_receipt_polls(), DEFAULT_MAX_RECEIPT_POLLS);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parameters(network("mainnet", None), None),
            Err(InvalidCliArgs::UnknownChain(_))
        ));
        assert!(matches!(
            parameters(network("base", Some("not a url")), None),
            Err(InvalidCliArgs::RpcUrlInvalid { .. })
        ));
        assert!(matches!(
            parameters(network("base", None), Some("0x123")),
            Err(InvalidCliArgs::SenderAddressInvalid(_))
        ));
        let mut bad_contract = network("base", None);
        bad_contract.contract = "nope".to_owned();
        assert!(matches!(
            parameters(bad_contract, None),
            Err(InvalidCliArgs::ContractAddressInvalid(_))
        ));
    }
}
