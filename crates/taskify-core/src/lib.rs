pub mod config;
pub mod counts;
pub mod draft;
pub mod error;
pub mod metrics;
pub mod pagination;
pub mod query;
pub mod records;
pub mod status;
pub mod types;

pub use config::*;
pub use counts::{AggregateCounts, CountKey};
pub use draft::{DraftOption, ScriptDraft};
pub use error::CoreError;
pub use pagination::{PageRef, PaginationLinkSet, PaginationMeta};
pub use query::{ParamKey, ParamValue, QueryParameterSet, QueryParameterStore};
pub use records::*;
pub use status::{StatusDisplay, Tone};
pub use types::*;
