//! Directory engine: page fetching and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_users, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{page_url, FetchSettings, PageFetcher, ReqwestPageFetcher};
pub use types::{EngineEvent, FailureKind, FetchError};
