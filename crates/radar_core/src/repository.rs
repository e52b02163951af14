use std::collections::BTreeSet;

/// Stable GitHub repository identifier.
pub type RepoId = u64;

/// Identifiers of starred repositories, ordered so persisted output is deterministic.
pub type StarredIds = BTreeSet<RepoId>;

/// A validated search result before the persisted starred flag is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedRepository {
    pub id: RepoId,
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub url: String,
    pub language: Option<String>,
}

/// Star state as it was when the record was fetched and seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBaseline {
    pub stars: u64,
    pub starred: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: RepoId,
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub url: String,
    pub language: Option<String>,
    pub starred: bool,
    pub baseline: StarBaseline,
}

impl Repository {
    pub fn from_fetched(fetched: FetchedRepository, starred: bool) -> Self {
        Self {
            id: fetched.id,
            name: fetched.name,
            description: fetched.description,
            stars: fetched.stars,
            url: fetched.url,
            language: fetched.language,
            starred,
            baseline: StarBaseline {
                stars: fetched.stars,
                starred,
            },
        }
    }

    /// Returns a copy with the starred flag flipped and the star count moved by one.
    ///
    /// The count is derived from the fetched baseline, so flipping twice always
    /// restores it. Unstarring a record fetched starred with zero stars shows zero.
    pub fn toggled(&self) -> Self {
        let starred = !self.starred;
        let delta = i64::from(starred) - i64::from(self.baseline.starred);
        let stars = self.baseline.stars.saturating_add_signed(delta);
        Self {
            starred,
            stars,
            ..self.clone()
        }
    }

    /// True when the record declares no language (absent or empty).
    pub fn has_no_language(&self) -> bool {
        self.language.as_deref().map_or(true, str::is_empty)
    }
}

/// Seeds each fetched record's starred flag from the persisted id set.
pub fn annotate_starred(fetched: Vec<FetchedRepository>, starred: &StarredIds) -> Vec<Repository> {
    fetched
        .into_iter()
        .map(|repo| {
            let is_starred = starred.contains(&repo.id);
            Repository::from_fetched(repo, is_starred)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(stars: u64, starred: bool) -> Repository {
        let fetched = FetchedRepository {
            id: 1,
            name: "tool".into(),
            description: None,
            stars,
            url: "https://github.com/o/tool".into(),
            language: Some(String::new()),
        };
        Repository::from_fetched(fetched, starred)
    }

    #[test]
    fn toggled_never_goes_below_zero() {
        let unstarred = repo(0, true).toggled();
        assert!(!unstarred.starred);
        assert_eq!(unstarred.stars, 0);
    }

    #[test]
    fn double_toggle_restores_zero_star_seeded_record() {
        let original = repo(0, true);
        let restored = original.toggled().toggled();
        assert_eq!(restored, original);
        assert_eq!(restored.stars, 0);
    }

    #[test]
    fn toggles_move_count_by_one_from_baseline() {
        let original = repo(5, false);
        let starred = original.toggled();
        assert_eq!((starred.starred, starred.stars), (true, 6));
        let unstarred = starred.toggled();
        assert_eq!((unstarred.starred, unstarred.stars), (false, 5));

        let seeded = repo(5, true).toggled();
        assert_eq!((seeded.starred, seeded.stars), (false, 4));
    }

    #[test]
    fn empty_language_counts_as_none() {
        assert!(repo(1, false).has_no_language());
    }
}
