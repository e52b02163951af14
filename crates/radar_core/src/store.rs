//! Observable store: owns the state and the injected persistence capability.

use radar_logging::{radar_debug, set_revision};

use crate::{
    annotate_starred, update, AppState, AppViewModel, Effect, FetchedRepository, LoadPhase, Msg,
    StarredStore,
};

type Subscriber = Box<dyn FnMut(&AppViewModel)>;

pub struct Store<P: StarredStore> {
    state: AppState,
    persistence: P,
    subscribers: Vec<Subscriber>,
    revision: u64,
}

impl<P: StarredStore> Store<P> {
    pub fn new(persistence: P) -> Self {
        Self {
            state: AppState::new(),
            persistence,
            subscribers: Vec::new(),
            revision: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of messages that changed the state so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a callback that receives a fresh snapshot after every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppViewModel) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies a message, persists starred ids synchronously, and notifies subscribers.
    ///
    /// Returns the effects the caller still has to execute.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut remaining = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::PersistStarred(ids) => {
                    radar_debug!("Persisting {} starred ids", ids.len());
                    self.persistence.save_starred_ids(&ids);
                }
                other => remaining.push(other),
            }
        }

        if self.state.consume_dirty() {
            self.revision += 1;
            set_revision(self.revision);
            let view = self.state.view();
            for subscriber in &mut self.subscribers {
                subscriber(&view);
            }
        }
        remaining
    }

    /// Completes the startup fetch.
    ///
    /// On success the persisted starred ids are read once and used to seed
    /// each record before it enters the state.
    pub fn complete_fetch(&mut self, result: Result<Vec<FetchedRepository>, String>) -> Vec<Effect> {
        if *self.state.phase() != LoadPhase::Loading {
            radar_debug!("Discarding fetch completion in phase {:?}", self.state.phase());
            return Vec::new();
        }
        let msg = match result {
            Ok(fetched) => {
                let starred = self.persistence.load_starred_ids();
                Msg::ReposLoaded(annotate_starred(fetched, &starred))
            }
            Err(reason) => Msg::FetchFailed(reason),
        };
        self.dispatch(msg)
    }
}
