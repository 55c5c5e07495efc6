// src/logging.rs
// =============================================================================
// Diagnostics setup.
//
// Everything logged through `tracing` goes to stderr. stdout is reserved for
// the link lines, so `linkwalk URL > links.txt` captures only the data.
// =============================================================================

use tracing::Level;

/// Installs a stderr subscriber that shows events at `level` and above.
pub fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("linkwalk logging initialized at {}", level);
}
