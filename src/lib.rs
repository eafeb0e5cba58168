mod allow_list;
pub mod constants;
mod context;
mod error;
mod gatekeeper;
mod header_builder;
mod headers;
mod options;
mod pattern;
mod pipeline;
mod result;
mod store;
mod util;

pub use allow_list::AllowList;
pub use context::{PriorAuth, RequestContext};
pub use error::{ErrorBody, ErrorData, GateError};
pub use gatekeeper::Gatekeeper;
pub use headers::Headers;
pub use options::{ConfigError, GatekeeperOptions, ValidationError};
pub use pattern::{
    DomainPattern, MAX_ORIGIN_LENGTH, MAX_PATTERN_LENGTH, PatternError, is_allowed, normalize,
};
pub use pipeline::{DEFAULT_STAGES, Pipeline, Stage};
pub use result::{Decision, PreflightResponse, Rejection};
pub use store::{AllowListSource, AllowListStore, SnapshotFn};
