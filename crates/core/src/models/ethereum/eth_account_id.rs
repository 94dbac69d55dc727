use crate::prelude::*;

use sha3::{Digest, Keccak256};

const ADDRESS_PREFIX: &str = "0x";
const ADDRESS_HEX_LEN: usize = 40;

#[derive(Eq, PartialEq, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct EthAccountId(pub [u8; 20]);

impl_serde::impl_fixed_hash_serde!(EthAccountId, 20);

/// Returns `true` if `input` is `0x` followed by exactly 40 hex digits of
/// any case. No checksum is enforced.
pub fn is_address(input: &str) -> bool {
    input.strip_prefix(ADDRESS_PREFIX).is_some_and(|hex| {
        hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// EIP-55 mixed case checksum encoding.
impl std::fmt::Display for EthAccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let address = hex::encode(self.0);
        let address_hash = Keccak256::digest(address.as_bytes());

        let checksum: String = address.char_indices().fold(
            String::from(ADDRESS_PREFIX),
            |mut acc, (index, address_char)| {
                let byte = address_hash[index / 2];
                let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0f };

                if nibble > 7 {
                    // make char uppercase if ith character is 9..f
                    acc.push(address_char.to_ascii_uppercase())
                } else {
                    // already lowercased
                    acc.push(address_char)
                }

                acc
            },
        );
        write!(f, "{checksum}")
    }
}

impl core::fmt::Debug for EthAccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ADDRESS_PREFIX}{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for EthAccountId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<EthAccountId> for [u8; 20] {
    fn from(value: EthAccountId) -> Self {
        value.0
    }
}

impl std::str::FromStr for EthAccountId {
    type Err = InvalidAddress;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidAddress {
            bad_value: input.to_owned(),
        };
        if !is_address(input) {
            return Err(invalid());
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(&input[ADDRESS_PREFIX.len()..], &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }
}
