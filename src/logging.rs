//! Logger setup. The terminal belongs to the UI, so records go to a file.

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Environment variable holding an `env_logger` filter, e.g. `debug` or
/// `flappy::game=trace`.
pub const LOG_ENV: &str = "FLAPPY_LOG";

/// Send log records to `path`, truncating it. If the file cannot be
/// created, logging stays disabled and the game runs anyway.
pub fn init(path: &Path) {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let result = Builder::from_env(Env::new().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::info!("Logging to {}", path.display());
    }
}
