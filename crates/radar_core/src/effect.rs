use crate::StarredIds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRepositories,
    /// Write the complete set of currently starred ids.
    PersistStarred(StarredIds),
}
