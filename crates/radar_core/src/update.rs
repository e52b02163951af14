use radar_logging::{radar_debug, radar_info, radar_warn};

use crate::state::FETCH_ERROR_MESSAGE;
use crate::{AppState, Effect, LoadPhase, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            // There is no refetch trigger: only the first start issues a request.
            if *state.phase() == LoadPhase::NotStarted {
                state.begin_loading();
                vec![Effect::FetchRepositories]
            } else {
                Vec::new()
            }
        }
        Msg::ReposLoaded(repos) => {
            if *state.phase() == LoadPhase::Loading {
                radar_info!("Loaded {} repositories", repos.len());
                state.set_repos(repos);
            } else {
                radar_debug!("Discarding fetch result in phase {:?}", state.phase());
            }
            Vec::new()
        }
        Msg::FetchFailed(reason) => {
            if *state.phase() == LoadPhase::Loading {
                radar_warn!("Repository fetch failed: {}", reason);
                state.fail(FETCH_ERROR_MESSAGE);
            } else {
                radar_debug!("Discarding fetch failure in phase {:?}", state.phase());
            }
            Vec::new()
        }
        Msg::SortClicked => {
            state.cycle_sort();
            Vec::new()
        }
        Msg::LanguageSelected(filter) => {
            state.select_language(filter);
            Vec::new()
        }
        Msg::StarredOnlyToggled => {
            state.toggle_starred_only();
            Vec::new()
        }
        Msg::StarToggled(id) => {
            if state.toggle_star(id) {
                vec![Effect::PersistStarred(state.starred_ids())]
            } else {
                radar_debug!("Ignoring star toggle for unknown id {}", id);
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
