use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use radar_core::{FetchedRepository, Store};
use radar_engine::{EngineConfig, LocalStorage};
use radar_logging::{radar_info, radar_warn};

use super::config::{load_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::persistence::FileStarredStore;
use super::ui::constants::{HELP_LINES, PROMPT};
use super::ui::input::{parse_command, Command};
use super::ui::render::render;

/// Everything the single event loop reacts to.
pub enum AppEvent {
    Input(Command),
    InputClosed,
    FetchCompleted(Result<Vec<FetchedRepository>, String>),
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = PathBuf::from(CONFIG_FILENAME);
    let (config, config_error) = match load_config(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(
        config.log_destination,
        config.level_filter(),
        &config.state_dir,
    );
    if let Some(err) = config_error {
        radar_warn!("Using default configuration: {}", err);
    }
    radar_info!("Starting with state dir {:?}", config.state_dir);

    let persistence = FileStarredStore::new(LocalStorage::new(config.state_dir.clone()));
    let mut store = Store::new(persistence);
    store.subscribe(|view| print_lines(render(view)));

    let (event_tx, event_rx) = mpsc::channel();
    let runner = EffectRunner::new(EngineConfig::new(config.fetch_settings()), event_tx.clone());
    spawn_input_reader(event_tx);

    // Mounting the view triggers the one and only fetch.
    runner.enqueue(store.dispatch(radar_core::Msg::Started));

    while let Ok(event) = event_rx.recv() {
        let effects = match event {
            AppEvent::FetchCompleted(result) => store.complete_fetch(result),
            AppEvent::Input(Command::Dispatch(msg)) => store.dispatch(msg),
            AppEvent::Input(Command::Help) => {
                print_lines(HELP_LINES.iter().map(|line| line.to_string()).collect());
                Vec::new()
            }
            AppEvent::Input(Command::Unknown(text)) => {
                print_lines(vec![format!("Unknown command: {text} (try `help`)")]);
                Vec::new()
            }
            AppEvent::Input(Command::Quit) | AppEvent::InputClosed => break,
        };
        runner.enqueue(effects);
    }

    radar_info!("Shutting down after {} state changes", store.revision());
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = parse_command(&line) {
                if event_tx.send(AppEvent::Input(command)).is_err() {
                    return;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

fn print_lines(lines: Vec<String>) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = write!(out, "{PROMPT}");
    let _ = out.flush();
}
