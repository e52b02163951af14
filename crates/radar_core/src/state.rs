use std::sync::Arc;

use crate::pipeline::{derive_view, language_facets, starred_ids};
use crate::view_model::{AppViewModel, RepoRowView, ViewStatus};
use crate::{LanguageFilter, RepoId, Repository, SortMode, StarredIds};

/// User-visible text for every fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to get Repositories. Try reloading the page.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    NotStarted,
    Loading,
    Failed(String),
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: LoadPhase,
    repos: Vec<Arc<Repository>>,
    languages: Vec<String>,
    language_filter: LanguageFilter,
    starred_only: bool,
    sort: SortMode,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn repos(&self) -> &[Arc<Repository>] {
        &self.repos
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn language_filter(&self) -> &LanguageFilter {
        &self.language_filter
    }

    pub fn starred_only(&self) -> bool {
        self.starred_only
    }

    pub fn starred_ids(&self) -> StarredIds {
        starred_ids(&self.repos)
    }

    /// Records after sort, language filter, and starred filter.
    pub fn displayed(&self) -> Vec<Arc<Repository>> {
        derive_view(
            &self.repos,
            self.sort,
            &self.language_filter,
            self.starred_only,
        )
    }

    pub fn view(&self) -> AppViewModel {
        let rows: Vec<RepoRowView> = match self.phase {
            LoadPhase::Loaded => self.displayed().iter().map(|r| RepoRowView::from(&**r)).collect(),
            _ => Vec::new(),
        };
        let status = match &self.phase {
            LoadPhase::NotStarted | LoadPhase::Loading => ViewStatus::Loading,
            LoadPhase::Failed(message) => ViewStatus::Error(message.clone()),
            LoadPhase::Loaded if rows.is_empty() => ViewStatus::Empty,
            LoadPhase::Loaded => ViewStatus::Loaded,
        };
        AppViewModel {
            status,
            rows,
            languages: self.languages.clone(),
            language_filter: self.language_filter.clone(),
            starred_only: self.starred_only,
            sort: self.sort,
            total: self.repos.len(),
        }
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
        self.mark_dirty();
    }

    pub(crate) fn set_repos(&mut self, repos: Vec<Repository>) {
        self.repos = repos.into_iter().map(Arc::new).collect();
        self.languages = language_facets(&self.repos);
        self.phase = LoadPhase::Loaded;
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Failed(message.into());
        self.mark_dirty();
    }

    pub(crate) fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.mark_dirty();
    }

    pub(crate) fn select_language(&mut self, filter: LanguageFilter) {
        if self.language_filter != filter {
            self.language_filter = filter;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_starred_only(&mut self) {
        self.starred_only = !self.starred_only;
        self.mark_dirty();
    }

    /// Flips one record's star. Other records keep their shared allocation.
    ///
    /// Returns false when no record has the given id.
    pub(crate) fn toggle_star(&mut self, id: RepoId) -> bool {
        let Some(slot) = self.repos.iter_mut().find(|repo| repo.id == id) else {
            return false;
        };
        *slot = Arc::new(slot.toggled());
        self.languages = language_facets(&self.repos);
        self.mark_dirty();
        true
    }
}
