use crate::prelude::*;

use serde::{Serialize, Serializer};

/// Arguments of one `batchPay(address[],uint256[],string[])` call plus the
/// value to attach. The three sequences are parallel.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize)]
pub struct BatchPayCall {
    #[getset(get = "pub")]
    addresses: Vec<EthAccountId>,

    #[getset(get = "pub")]
    #[serde(serialize_with = "serialize_decimal_list")]
    amounts: Vec<U256>,

    #[getset(get = "pub")]
    names: Vec<String>,

    /// Sum of `amounts` plus the protocol fee.
    #[getset(get_copy = "pub")]
    #[serde(serialize_with = "serialize_decimal")]
    value: U256,
}

impl BatchPayCall {
    /// Builds the call from recipients already known to be valid, keeping
    /// their order.
    pub fn try_from_recipients<'a>(
        recipients: impl IntoIterator<Item = &'a Recipient>,
    ) -> Result<Self, InvalidAddress> {
        let mut addresses = Vec::new();
        let mut amounts = Vec::new();
        let mut names = Vec::new();
        for recipient in recipients {
            addresses.push(recipient.address().parse::<EthAccountId>()?);
            amounts.push(recipient.amount_wei());
            names.push(recipient.name().clone());
        }
        let total_amount = amounts
            .iter()
            .fold(U256::zero(), |sum, amount| sum.saturating_add(*amount));
        let value = total_amount.saturating_add(calculate_fee(total_amount));
        Ok(Self {
            addresses,
            amounts,
            names,
            value,
        })
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// ABI encoded calldata, selector included.
    pub fn calldata(&self) -> Vec<u8> {
        let tokens = [
            AbiToken::Array(self.addresses.iter().copied().map(AbiToken::Address).collect()),
            AbiToken::Array(self.amounts.iter().copied().map(AbiToken::Uint).collect()),
            AbiToken::Array(self.names.iter().cloned().map(AbiToken::String).collect()),
        ];
        encode_function_call(BATCH_PAY_SIGNATURE, &tokens)
    }
}

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn serialize_decimal_list<S: Serializer>(
    values: &[U256],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|v| v.to_string()))
}
