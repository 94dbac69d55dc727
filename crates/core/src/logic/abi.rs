//! The slice of the Solidity ABI the `BatchPay` contract needs: encoding of
//! address/uint256/string values, arrays and tuples of those, and decoding of
//! the `getPaymentHistory` return value.

use crate::prelude::*;

use sha3::{Digest, Keccak256};

const WORD: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiToken {
    Address(EthAccountId),
    Uint(U256),
    String(String),
    Array(Vec<AbiToken>),
    Tuple(Vec<AbiToken>),
}

impl AbiToken {
    /// Bytes the value occupies in the head of its enclosing sequence.
    fn head_size(&self) -> usize {
        match self {
            AbiToken::Tuple(items) if !self.is_dynamic() => {
                items.iter().map(AbiToken::head_size).sum()
            }
            _ => WORD,
        }
    }

    fn is_dynamic(&self) -> bool {
        match self {
            AbiToken::Address(_) | AbiToken::Uint(_) => false,
            AbiToken::String(_) | AbiToken::Array(_) => true,
            AbiToken::Tuple(items) => items.iter().any(AbiToken::is_dynamic),
        }
    }
}

pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

pub fn encode_function_call(signature: &str, tokens: &[AbiToken]) -> Vec<u8> {
    let mut calldata = function_selector(signature).to_vec();
    calldata.extend(encode_tokens(tokens));
    calldata
}

fn uint_word(value: U256) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    word
}

fn address_word(address: &EthAccountId) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 20..].copy_from_slice(&address.0);
    word
}

fn encode_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut encoded = uint_word(U256::from(bytes.len())).to_vec();
    encoded.extend_from_slice(bytes);
    let padding = (WORD - bytes.len() % WORD) % WORD;
    encoded.resize(encoded.len() + padding, 0);
    encoded
}

/// Head/tail encoding of a sequence of values, as used for function
/// arguments and tuple contents.
pub fn encode_tokens(tokens: &[AbiToken]) -> Vec<u8> {
    let head_len: usize = tokens.iter().map(AbiToken::head_size).sum();
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        if token.is_dynamic() {
            head.extend_from_slice(&uint_word(U256::from(head_len + tail.len())));
        }
        match token {
            AbiToken::Address(address) => head.extend_from_slice(&address_word(address)),
            AbiToken::Uint(value) => head.extend_from_slice(&uint_word(*value)),
            AbiToken::String(text) => tail.extend(encode_bytes(text.as_bytes())),
            AbiToken::Array(items) => {
                tail.extend_from_slice(&uint_word(U256::from(items.len())));
                tail.extend(encode_tokens(items));
            }
            AbiToken::Tuple(items) if token.is_dynamic() => tail.extend(encode_tokens(items)),
            AbiToken::Tuple(items) => head.extend(encode_tokens(items)),
        }
    }

    head.extend(tail);
    head
}

pub fn get_payment_history_calldata(payer: EthAccountId) -> Vec<u8> {
    encode_function_call(GET_PAYMENT_HISTORY_SIGNATURE, &[AbiToken::Address(payer)])
}

struct AbiReader<'a> {
    data: &'a [u8],
}

impl<'a> AbiReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn at(base: usize, relative: usize) -> Result<usize, AbiError> {
        base.checked_add(relative)
            .ok_or(AbiError::OffsetOverflow { offset: base })
    }

    fn word(&self, offset: usize) -> Result<&'a [u8], AbiError> {
        Self::at(offset, WORD)
            .ok()
            .and_then(|end| self.data.get(offset..end))
            .ok_or(AbiError::OutOfBounds {
                offset,
                len: self.data.len(),
            })
    }

    fn uint(&self, offset: usize) -> Result<U256, AbiError> {
        self.word(offset).map(U256::from_big_endian)
    }

    fn u64(&self, offset: usize) -> Result<u64, AbiError> {
        let value = self.uint(offset)?;
        if value.bits() > 64 {
            return Err(AbiError::ValueTooLarge { offset });
        }
        Ok(value.low_u64())
    }

    fn usize(&self, offset: usize) -> Result<usize, AbiError> {
        usize::try_from(self.u64(offset)?).map_err(|_| AbiError::ValueTooLarge { offset })
    }

    fn address(&self, offset: usize) -> Result<EthAccountId, AbiError> {
        let word = self.word(offset)?;
        let (padding, address) = word.split_at(WORD - 20);
        if padding.iter().any(|b| *b != 0) {
            return Err(AbiError::DirtyAddress { offset });
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(address);
        Ok(EthAccountId(bytes))
    }

    fn string(&self, offset: usize) -> Result<String, AbiError> {
        let len = self.usize(offset)?;
        let start = Self::at(offset, WORD)?;
        let end = Self::at(start, len)?;
        let bytes = self.data.get(start..end).ok_or(AbiError::OutOfBounds {
            offset: start,
            len: self.data.len(),
        })?;
        String::from_utf8(bytes.to_vec()).map_err(|_| AbiError::InvalidUtf8 { offset })
    }

    /// Array of static elements: length word followed by the elements inline.
    fn static_array<T>(
        &self,
        offset: usize,
        read: impl Fn(&Self, usize) -> Result<T, AbiError>,
    ) -> Result<Vec<T>, AbiError> {
        let len = self.usize(offset)?;
        let base = Self::at(offset, WORD)?;
        (0..len)
            .map(|i| read(self, Self::at(base, i.saturating_mul(WORD))?))
            .collect()
    }

    /// Array of dynamic elements: length word followed by one offset per
    /// element, relative to the first offset word.
    fn dynamic_array<T>(
        &self,
        offset: usize,
        read: impl Fn(&Self, usize) -> Result<T, AbiError>,
    ) -> Result<Vec<T>, AbiError> {
        let len = self.usize(offset)?;
        let base = Self::at(offset, WORD)?;
        (0..len)
            .map(|i| {
                let element = self.usize(Self::at(base, i.saturating_mul(WORD))?)?;
                read(self, Self::at(base, element)?)
            })
            .collect()
    }

    fn payment_batch(&self, tuple: usize) -> Result<PaymentBatch, AbiError> {
        let field = |index: usize| Self::at(tuple, index * WORD);
        let recipients =
            self.static_array(Self::at(tuple, self.usize(field(0)?)?)?, Self::address)?;
        let amounts = self.static_array(Self::at(tuple, self.usize(field(1)?)?)?, Self::uint)?;
        let names = self.dynamic_array(Self::at(tuple, self.usize(field(2)?)?)?, Self::string)?;
        let timestamp = self.u64(field(3)?)?;
        Ok(PaymentBatch::builder()
            .recipients(recipients)
            .amounts(amounts)
            .names(names)
            .timestamp(timestamp)
            .build())
    }
}

/// Decodes the `(address[],uint256[],string[],uint256)[]` returned by
/// `getPaymentHistory`.
pub fn decode_payment_history(data: &[u8]) -> Result<Vec<PaymentBatch>, AbiError> {
    let reader = AbiReader::new(data);
    let array = reader.usize(0)?;
    reader.dynamic_array(array, AbiReader::payment_batch)
}
