mod backend;
mod config;
mod containers;
mod copy;
mod dialog;
mod error;
mod input;
mod logging;
mod pane;
mod render;
mod session;
mod theme;
mod util;

use std::{
    env,
    time::{Duration, Instant},
};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use backend::DockerBackend;
use config::Config;
use containers::ContainerPicker;
use pane::Pane;
use session::BrowserSession;
use util::{EVENT_POLL_MS, ROOT, STATUS_DISPLAY_SECS};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();

    let log_path = config.log_file.clone().unwrap_or_else(logging::default_log_path);
    let _guard = logging::init_tracing(&log_path, &config.log_level)?;

    let mut app = App::new(&config)?;
    ratatui::run(|terminal| app.run(terminal))?;
    info!("exiting");
    Ok(())
}

// ============================================================================
// Screens and status line
// ============================================================================

enum Screen {
    Browser,
    ContainerPicker(ContainerPicker),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

struct Status {
    text: String,
    kind: StatusKind,
    since: Instant,
}

// ============================================================================
// App
// ============================================================================

struct App {
    session: BrowserSession<DockerBackend>,
    screen: Screen,
    status: Option<Status>,
    should_quit: bool,
}

impl App {
    fn new(config: &Config) -> color_eyre::Result<Self> {
        let start = match &config.start_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().wrap_err("cannot determine the current directory")?,
        };
        let start = start
            .canonicalize()
            .wrap_err_with(|| format!("cannot open {}", start.display()))?;

        let backend = DockerBackend::new(config.docker.clone());
        let host = Pane::local(start.to_string_lossy()).with_show_hidden(config.all);
        let container = Pane::remote(None, ROOT).with_show_hidden(config.all);

        let mut app = Self {
            session: BrowserSession::new(backend, host, container),
            screen: Screen::Browser,
            status: None,
            should_quit: false,
        };

        info!(cwd = %start.display(), docker = %config.docker, "starting");
        if let Err(e) = app.session.refresh_active() {
            warn!(error = %e, "cannot list start directory");
            app.set_error(e.to_string());
        }
        if let Some(name) = &config.container {
            app.bind_container(name.clone());
        }

        Ok(app)
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if let Some(status) = &self.status {
                if status.since.elapsed() > Duration::from_secs(STATUS_DISPLAY_SECS) {
                    self.status = None;
                }
            }

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                self.handle_events()?;
            }
        }
        Ok(())
    }

    fn set_info(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), StatusKind::Info);
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), StatusKind::Error);
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status = Some(Status {
            text,
            kind,
            since: Instant::now(),
        });
    }

    fn bind_container(&mut self, name: String) {
        if let Err(e) = self.session.bind_remote(name) {
            self.set_error(e.to_string());
        }
    }
}
