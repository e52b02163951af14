use std::sync::{Arc, Once};

use pretty_assertions::assert_eq;
use radar_core::{
    update, AppState, Effect, FetchedRepository, LanguageFilter, LoadPhase, Msg, Repository,
    SortMode, StarredIds, ViewStatus, FETCH_ERROR_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(radar_logging::initialize_for_tests);
}

fn seeded(id: u64, name: &str, language: Option<&str>, stars: u64, starred: bool) -> Repository {
    let fetched = FetchedRepository {
        id,
        name: name.to_string(),
        description: None,
        stars,
        url: format!("https://github.com/owner/{name}"),
        language: language.map(ToOwned::to_owned),
    };
    Repository::from_fetched(fetched, starred)
}

fn repo(id: u64, name: &str, language: Option<&str>, stars: u64) -> Repository {
    seeded(id, name, language, stars, false)
}

fn loaded(repos: Vec<Repository>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, _) = update(state, Msg::ReposLoaded(repos));
    state.consume_dirty();
    state
}

fn ids(state: &AppState) -> Vec<u64> {
    state.view().rows.iter().map(|row| row.id).collect()
}

#[test]
fn start_requests_fetch_once() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::FetchRepositories]);
    assert_eq!(*state.phase(), LoadPhase::Loading);
    assert_eq!(state.view().status, ViewStatus::Loading);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn scenario_language_filters_and_star_toggle() {
    init_logging();
    let state = loaded(vec![
        repo(1, "alpha", Some("Go"), 10),
        repo(2, "beta", None, 5),
    ]);
    assert_eq!(state.view().languages, vec!["Go".to_string()]);

    let (state, _) = update(
        state,
        Msg::LanguageSelected(LanguageFilter::Language("Go".into())),
    );
    assert_eq!(ids(&state), vec![1]);

    let (state, _) = update(state, Msg::LanguageSelected(LanguageFilter::NoLanguage));
    assert_eq!(ids(&state), vec![2]);

    let (state, effects) = update(state, Msg::StarToggled(2));
    let view = state.view();
    let row = &view.rows[0];
    assert_eq!(row.stars, 6);
    assert!(row.starred);
    assert_eq!(effects, vec![Effect::PersistStarred(StarredIds::from([2]))]);
}

#[test]
fn empty_fetch_shows_empty_state_not_error() {
    init_logging();
    let state = loaded(Vec::new());
    let view = state.view();
    assert_eq!(view.status, ViewStatus::Empty);
    assert!(view.rows.is_empty());
    assert!(view.languages.is_empty());
}

#[test]
fn fetch_failure_shows_fixed_message_and_no_rows() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, effects) = update(state, Msg::FetchFailed("http status 503".into()));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.status, ViewStatus::Error(FETCH_ERROR_MESSAGE.to_string()));
    assert!(view.rows.is_empty());
}

#[test]
fn late_results_are_discarded() {
    init_logging();
    let state = loaded(vec![repo(1, "alpha", None, 1)]);
    let (mut state, _) = update(state, Msg::ReposLoaded(vec![repo(9, "late", None, 1)]));
    assert_eq!(ids(&state), vec![1]);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::FetchFailed("late".into()));
    assert_eq!(state.view().status, ViewStatus::Loaded);
}

#[test]
fn toggle_unknown_id_is_silent_noop() {
    init_logging();
    let mut state = loaded(vec![repo(1, "alpha", None, 1)]);
    let before = state.clone();
    let (mut next, effects) = update(state.clone(), Msg::StarToggled(42));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
    assert!(!state.consume_dirty());
}

#[test]
fn toggle_twice_restores_record_and_keeps_others_shared() {
    init_logging();
    let state = loaded(vec![
        repo(1, "alpha", Some("Rust"), 3),
        repo(2, "beta", Some("Go"), 8),
    ]);
    let original = state.repos().to_vec();

    let (state, _) = update(state, Msg::StarToggled(1));
    assert!(Arc::ptr_eq(&original[1], &state.repos()[1]));
    assert!(!Arc::ptr_eq(&original[0], &state.repos()[0]));
    assert_eq!(state.repos()[0].stars, 4);

    let (state, effects) = update(state, Msg::StarToggled(1));
    assert_eq!(*state.repos()[0], *original[0]);
    assert_eq!(*state.repos()[1], *original[1]);
    assert_eq!(effects, vec![Effect::PersistStarred(StarredIds::new())]);
}

#[test]
fn starred_only_keeps_starred_records() {
    init_logging();
    let state = loaded(vec![repo(1, "alpha", None, 1), seeded(2, "beta", None, 1, true)]);

    let (state, _) = update(state, Msg::StarredOnlyToggled);
    assert!(state.view().starred_only);
    assert_eq!(ids(&state), vec![2]);

    let (state, _) = update(state, Msg::StarredOnlyToggled);
    assert_eq!(ids(&state), vec![1, 2]);
}

#[test]
fn sort_click_cycles_and_returns_to_fetch_order() {
    init_logging();
    let state = loaded(vec![
        repo(1, "charlie", None, 30),
        repo(2, "Alpha", None, 20),
        repo(3, "bravo", None, 10),
    ]);

    let (state, _) = update(state, Msg::SortClicked);
    assert_eq!(state.sort(), SortMode::Ascending);
    assert_eq!(ids(&state), vec![2, 3, 1]);

    let (state, _) = update(state, Msg::SortClicked);
    assert_eq!(state.sort(), SortMode::Descending);
    assert_eq!(ids(&state), vec![1, 3, 2]);

    let (state, _) = update(state, Msg::SortClicked);
    assert_eq!(state.sort(), SortMode::Unsorted);
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn filters_leave_raw_collection_untouched() {
    init_logging();
    let state = loaded(vec![repo(1, "b", Some("Go"), 1), repo(2, "a", None, 1)]);
    let raw = state.repos().to_vec();

    let (state, _) = update(state, Msg::SortClicked);
    let (state, _) = update(state, Msg::LanguageSelected(LanguageFilter::NoLanguage));
    let (state, _) = update(state, Msg::StarredOnlyToggled);

    assert_eq!(state.repos(), raw.as_slice());
    assert_eq!(state.view().status, ViewStatus::Empty);
    assert_eq!(state.view().total, 2);
}

#[test]
fn selecting_same_language_does_not_dirty_state() {
    init_logging();
    let state = loaded(vec![repo(1, "a", Some("Go"), 1)]);
    let (mut state, _) = update(state, Msg::LanguageSelected(LanguageFilter::All));
    assert!(!state.consume_dirty());
}

#[test]
fn double_toggle_restores_record_seeded_starred_with_zero_stars() {
    init_logging();
    let state = loaded(vec![seeded(3, "fresh", None, 0, true)]);
    let original = (*state.repos()[0]).clone();

    let (state, effects) = update(state, Msg::StarToggled(3));
    assert_eq!((state.repos()[0].starred, state.repos()[0].stars), (false, 0));
    assert_eq!(effects, vec![Effect::PersistStarred(StarredIds::new())]);

    let (state, effects) = update(state, Msg::StarToggled(3));
    assert_eq!(*state.repos()[0], original);
    assert_eq!(effects, vec![Effect::PersistStarred(StarredIds::from([3]))]);
}
