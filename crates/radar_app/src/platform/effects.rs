use std::sync::mpsc;
use std::thread;

use radar_core::{Effect, FetchedRepository};
use radar_engine::{EngineConfig, EngineEvent, EngineHandle, RepoSummary};
use radar_logging::{radar_debug, radar_info};

use super::app::AppEvent;

/// Executes store effects against the engine and feeds results back as app events.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (engine, events) = EngineHandle::new(config);
        thread::spawn(move || {
            while let Some(event) = events.recv() {
                if event_tx.send(map_event(event)).is_err() {
                    break;
                }
            }
        });
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRepositories => {
                    radar_info!("Fetching popular repositories");
                    self.engine.fetch_repositories();
                }
                Effect::PersistStarred(ids) => {
                    // The store writes these before returning.
                    radar_debug!("PersistStarred({} ids) already handled", ids.len());
                }
            }
        }
    }
}

fn map_event(event: EngineEvent) -> AppEvent {
    match event {
        EngineEvent::RepositoriesFetched { result } => AppEvent::FetchCompleted(
            result
                .map(|repos| repos.into_iter().map(map_summary).collect())
                .map_err(|err| format!("{err}: {}", err.cause)),
        ),
    }
}

fn map_summary(summary: RepoSummary) -> FetchedRepository {
    FetchedRepository {
        id: summary.id,
        name: summary.name,
        description: summary.description,
        stars: summary.stars,
        url: summary.url,
        language: summary.language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_engine::{FailureKind, FetchError, RepoFetchError};

    #[test]
    fn failures_keep_their_cause_for_logging() {
        let event = EngineEvent::RepositoriesFetched {
            result: Err(RepoFetchError::from(FetchError {
                kind: FailureKind::HttpStatus(502),
                message: "502 Bad Gateway".into(),
            })),
        };
        match map_event(event) {
            AppEvent::FetchCompleted(Err(reason)) => {
                assert_eq!(
                    reason,
                    "repository fetch failed: http status 502: 502 Bad Gateway"
                );
            }
            _ => panic!("expected failed fetch"),
        }
    }

    #[test]
    fn summaries_map_field_by_field() {
        let event = EngineEvent::RepositoriesFetched {
            result: Ok(vec![RepoSummary {
                id: 5,
                name: "radar".into(),
                description: Some("d".into()),
                stars: 12,
                url: "https://github.com/o/radar".into(),
                language: Some("Rust".into()),
            }]),
        };
        match map_event(event) {
            AppEvent::FetchCompleted(Ok(repos)) => {
                assert_eq!(repos[0].id, 5);
                assert_eq!(repos[0].stars, 12);
                assert_eq!(repos[0].language.as_deref(), Some("Rust"));
            }
            _ => panic!("expected fetched repositories"),
        }
    }
}
