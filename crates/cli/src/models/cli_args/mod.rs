#[allow(clippy::module_inception)]
mod cli_args;
mod draft_args;
mod history_args;
mod network_args;
mod pay_args;
mod sample_args;

pub use cli_args::*;
pub use draft_args::*;
pub use history_args::*;
pub use network_args::*;
pub use pay_args::*;
pub use sample_args::*;
