mod eth_account_id;
mod tx_hash;

pub use eth_account_id::*;
pub use tx_hash::*;
