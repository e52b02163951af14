use crate::{LanguageFilter, RepoId, Repository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Presentation mounted; triggers the one and only fetch.
    Started,
    /// Fetch finished with records already annotated with their starred flag.
    ReposLoaded(Vec<Repository>),
    /// Fetch failed; carries the diagnostic for logs, not for display.
    FetchFailed(String),
    /// User clicked the name sort control.
    SortClicked,
    /// User picked an entry in the language filter.
    LanguageSelected(LanguageFilter),
    /// User flipped the starred-only switch.
    StarredOnlyToggled,
    /// User starred or unstarred a repository.
    StarToggled(RepoId),
    /// Fallback for placeholder wiring.
    NoOp,
}
