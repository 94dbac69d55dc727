mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Third Party Crates
    pub use bon::Builder;
    pub use getset::{CopyGetters, Getters};
    pub use indexmap::IndexSet;
    pub use log::{debug, error, info, warn};
    pub use primitive_types::U256;
    pub use url::Url;
}
