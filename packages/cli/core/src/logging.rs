/* packages/cli/core/src/logging.rs */

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "COUNTRIES_LOG";

/// Diagnostics go to stderr so stdout stays clean for `--json` output.
pub fn init() {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .ok();
}
