//! Repo radar core: pure state machine, derived-view pipeline, and store.
mod effect;
mod msg;
mod persistence;
pub mod pipeline;
mod repository;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use persistence::{MemoryStarredStore, StarredStore};
pub use pipeline::{LanguageFilter, SortMode};
pub use repository::{annotate_starred, FetchedRepository, RepoId, Repository, StarBaseline, StarredIds};
pub use state::{AppState, LoadPhase, FETCH_ERROR_MESSAGE};
pub use store::Store;
pub use update::update;
pub use view_model::{AppViewModel, RepoRowView, ViewStatus};
