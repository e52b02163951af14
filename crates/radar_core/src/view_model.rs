use crate::{LanguageFilter, RepoId, Repository, SortMode};

/// Which of the mutually exclusive body states the presentation shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Loading,
    Error(String),
    /// Loaded, but the derived view holds no records.
    Empty,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: ViewStatus,
    pub rows: Vec<RepoRowView>,
    pub languages: Vec<String>,
    pub language_filter: LanguageFilter,
    pub starred_only: bool,
    pub sort: SortMode,
    /// Size of the raw collection before filtering.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRowView {
    pub id: RepoId,
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub url: String,
    pub language: Option<String>,
    pub starred: bool,
}

impl From<&Repository> for RepoRowView {
    fn from(repo: &Repository) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            description: repo.description.clone(),
            stars: repo.stars,
            url: repo.url.clone(),
            language: repo.language.clone(),
            starred: repo.starred,
        }
    }
}
