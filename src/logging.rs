use std::{
    env,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{eyre, WrapErr};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_NAME: &str = "confex";

/// Default log location following the XDG Base Directory specification
pub fn default_log_path() -> PathBuf {
    state_home(env::var("XDG_STATE_HOME").ok(), env::var("HOME").ok())
        .join(APP_NAME)
        .join(format!("{}.log", APP_NAME))
}

fn state_home(xdg_state_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_state_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.unwrap_or_else(|| ".".to_owned())).join(".local/state"),
    }
}

/// Send tracing output to `path`; the terminal belongs to the UI.
///
/// `RUST_LOG` wins over `level`. The returned guard flushes the writer on drop
/// and must be held until the program exits.
pub fn init_tracing(path: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("cannot create log directory {}", dir.display()))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("log path {} has no file name", path.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| eyre!("failed to initialize tracing: {}", e))?;

    Ok(guard)
}
