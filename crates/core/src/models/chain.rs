use crate::prelude::*;

/// Networks the `BatchPay` contract is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Chain {
    #[display("Base")]
    Base,
    #[default]
    #[display("Base Sepolia")]
    BaseSepolia,
}

impl Chain {
    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Base => 8453,
            Chain::BaseSepolia => 84532,
        }
    }

    /// Public RPC endpoint used when none is given.
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Chain::Base => "https://mainnet.base.org",
            Chain::BaseSepolia => "https://sepolia.base.org",
        }
    }
}

impl std::str::FromStr for Chain {
    type Err = UnknownChain;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Chain::Base),
            "base-sepolia" | "base_sepolia" => Ok(Chain::BaseSepolia),
            _ => Err(UnknownChain {
                bad_value: input.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_chains() {
        assert_eq!("base".parse::<Chain>(), Ok(Chain::Base));
        assert_eq!("Base-Sepolia".parse::<Chain>(), Ok(Chain::BaseSepolia));
        assert_eq!(Chain::BaseSepolia.chain_id(), 84532);
        assert_eq!(Chain::default(), Chain::BaseSepolia);
    }

    #[test]
    fn default_rpc_urls_parse() {
        for chain in [Chain::Base, Chain::BaseSepolia] {
            assert!(Url::parse(chain.default_rpc_url()).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_chain() {
        assert_eq!(
            "mainnet".parse::<Chain>(),
            Err(UnknownChain {
                bad_value: "mainnet".to_owned()
            })
        );
    }
}
