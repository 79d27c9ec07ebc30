use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use directory_core::{ListController, Msg, User};
use directory_logging::{directory_debug, directory_info, directory_warn, parse_level};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::input::{self, Command};
use super::{logging, render};

/// How long the loop waits for input before polling the engine again.
const POLL_INTERVAL: Duration = Duration::from_millis(40);

enum Input {
    Line(String),
    Closed,
}

pub fn run_app(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let explicit = config_path.is_some();
    let path = config_path.unwrap_or_else(|| PathBuf::from(config::CONFIG_FILENAME));
    let loaded = config::load_config(&path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    logging::initialize(config.log_destination, parse_level(&config.log_level));
    match loaded {
        Ok(Some(_)) => directory_info!("Loaded config from {:?}", path),
        Ok(None) if explicit => directory_warn!("Config {:?} not found; using defaults", path),
        Ok(None) => {}
        Err(err) => directory_warn!("{}; using defaults", err),
    }

    let runner =
        EffectRunner::new(config.fetch_settings()).context("failed to start fetch engine")?;
    let mut session = Session::new(ListController::new(config.page_size()), runner);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Input::Closed);
    });

    println!("{}", input::HELP);
    session.dispatch(Msg::Initialize);

    loop {
        for msg in session.runner.poll() {
            session.dispatch(msg);
        }

        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Input::Line(line)) => {
                let records: Vec<User> =
                    session.controller.state().derived_records().cloned().collect();
                match input::parse_command(&line, &records) {
                    Command::Dispatch(msg) => session.dispatch(msg),
                    Command::Help => println!("{}", input::HELP),
                    Command::Quit => break,
                    Command::Unknown(raw) => println!("Unknown command: {raw} (try `help`)"),
                }
            }
            Ok(Input::Closed) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }

        session.render_if_dirty();
    }

    // Any fetch still in flight is cancelled and its result discarded.
    session.dispatch(Msg::Disposed);
    directory_info!("Session closed");
    Ok(())
}

struct Session {
    controller: ListController,
    runner: EffectRunner,
}

impl Session {
    fn new(controller: ListController, runner: EffectRunner) -> Self {
        Self { controller, runner }
    }

    fn dispatch(&mut self, msg: Msg) {
        directory_debug!("dispatch {}", short_name(&msg));
        let fetched = matches!(msg, Msg::PageFetched { .. });
        let effects = self.controller.dispatch(msg);
        if fetched {
            let dropped = self.controller.state().last_dropped_duplicates();
            if dropped > 0 {
                directory_debug!("dropped {} duplicate users from page", dropped);
            }
        }
        self.runner.enqueue(effects);
    }

    fn render_if_dirty(&mut self) {
        if self.controller.state_mut().consume_dirty() {
            println!();
            for line in render::render(&self.controller.state().view()) {
                println!("{line}");
            }
        }
    }
}

fn short_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::Initialize => "Initialize",
        Msg::RetryClicked => "RetryClicked",
        Msg::SearchTextChanged(_) => "SearchTextChanged",
        Msg::SortPressed(_) => "SortPressed",
        Msg::ScrollEndReached => "ScrollEndReached",
        Msg::ItemSelected(_) => "ItemSelected",
        Msg::BackPressed => "BackPressed",
        Msg::PageFetched { .. } => "PageFetched",
        Msg::Disposed => "Disposed",
    }
}
