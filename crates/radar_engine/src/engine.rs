use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use radar_logging::{radar_error, radar_info, radar_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::query::created_after;
use crate::EngineEvent;

/// Supplies the local calendar date the search window is anchored on.
pub type TodayFn = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

#[derive(Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub today: TodayFn,
}

impl EngineConfig {
    pub fn new(fetch: FetchSettings) -> Self {
        Self {
            fetch,
            today: Arc::new(|| chrono::Local::now().date_naive()),
        }
    }
}

enum EngineCommand {
    FetchRepositories,
}

/// Sends commands to the background engine thread.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receives events produced by the engine thread.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> (Self, EngineEvents) {
        let fetcher: Arc<dyn Fetcher> = Arc::new(ReqwestFetcher::new(config.fetch.clone()));
        Self::with_fetcher(fetcher, config.today)
    }

    /// Starts the engine with a custom fetcher implementation.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, today: TodayFn) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    radar_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let today = today.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), today, command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn fetch_repositories(&self) {
        if self.cmd_tx.send(EngineCommand::FetchRepositories).is_err() {
            radar_warn!("Engine thread is gone; fetch request dropped");
        }
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    today: TodayFn,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchRepositories => {
            let since = created_after(today());
            let result = fetcher.fetch_repositories(since).await;
            match &result {
                Ok(repos) => radar_info!("Fetched {} repositories created after {}", repos.len(), since),
                Err(err) => radar_warn!("{}: {}", err, err.cause),
            }
            let _ = event_tx.send(EngineEvent::RepositoriesFetched { result });
        }
    }
}
