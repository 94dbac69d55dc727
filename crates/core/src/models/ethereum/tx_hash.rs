use crate::prelude::*;

#[derive(Eq, PartialEq, Copy, Clone, Default, Hash, derive_more::Debug, derive_more::Display)]
#[debug("TxHash(0x{})", hex::encode(_0))]
#[display("0x{}", hex::encode(_0))]
pub struct TxHash(pub [u8; 32]);

impl_serde::impl_fixed_hash_serde!(TxHash, 32);

impl std::str::FromStr for TxHash {
    type Err = AbiError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hex = input.strip_prefix("0x").unwrap_or(input);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex, &mut bytes).map_err(|e| AbiError::InvalidHex {
            underlying: e.to_string(),
        })?;
        Ok(Self(bytes))
    }
}
