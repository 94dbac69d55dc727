mod abi;
mod contract;
mod csv_ingest;
mod ether_units;
mod history;
mod manual_entry;
mod payment_draft;
mod totals;

pub use abi::*;
pub use contract::*;
pub use csv_ingest::*;
pub use ether_units::*;
pub use history::*;
pub use manual_entry::*;
pub use totals::*;
