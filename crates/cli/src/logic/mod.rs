mod build_draft;
mod init_logging;
mod render;
mod run;

pub use build_draft::*;
pub use init_logging::*;
pub use render::*;
pub use run::*;
