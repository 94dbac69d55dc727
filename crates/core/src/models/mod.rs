mod batch_pay_call;
mod chain;
mod constants;
mod error;
mod ethereum;
mod manual_entry;
mod parameters;
mod parsed_csv;
mod payment_batch;
mod payment_draft;
mod payment_summary;
mod recipient;
mod traits;
mod transaction_status;

pub use batch_pay_call::*;
pub use chain::*;
pub use constants::*;
pub use error::*;
pub use ethereum::*;
pub use manual_entry::*;
pub use parameters::*;
pub use parsed_csv::*;
pub use payment_batch::*;
pub use payment_draft::*;
pub use payment_summary::*;
pub use recipient::*;
pub use traits::*;
pub use transaction_status::*;
