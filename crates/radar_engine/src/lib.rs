//! Repo radar engine: GitHub search IO, response decoding, and local storage.
mod decode;
mod engine;
mod fetch;
mod persist;
pub mod query;
mod types;

pub use decode::{decode_search_response, DecodeError};
pub use engine::{EngineConfig, EngineEvents, EngineHandle, TodayFn};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_API_BASE_URL};
pub use persist::{ensure_state_dir, AtomicFileWriter, LocalStorage, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, RepoFetchError, RepoId, RepoSummary};
