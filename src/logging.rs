// Conditional logging macros - only active in debug builds

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_DIR_NAME: &str = "wordmania";
const LOG_FILE_NAME: &str = "wordmania.log";
const DEFAULT_FILTER: &str = "warn";

/// Default log location: `<data_local_dir>/wordmania/wordmania.log`.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Initialise `env_logger`, honouring `RUST_LOG`.
///
/// Stdout belongs to the game, so records go to `log_file` (or the default
/// location). Falls back to stderr when the file cannot be opened. Calling
/// this more than once is harmless.
pub fn init_logging(log_file: Option<&Path>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = log_file.map(Path::to_path_buf).or_else(default_log_path);
    if let Some(file) = path.as_deref().and_then(open_log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().unwrap_or(());
}
