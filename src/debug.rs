//! Log bridge for the command-line tool.
//!
//! Routes `log::info!()` and friends to stderr so that stdout stays clean for
//! the command's own output. The level comes from `--log-level`, then the
//! `TERMSETTINGS_LOG` environment variable, then defaults to `warn`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable consulted when no explicit level is given.
pub const LOG_ENV_VAR: &str = "TERMSETTINGS_LOG";

struct StderrLogger {
    level: LevelFilter,
    out: Mutex<std::io::Stderr>,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = self.out.lock();
        let _ = writeln!(
            out,
            "[{}] [{:<5}] [{}] {}",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Resolve the effective level: explicit flag, then environment, then `warn`.
pub fn resolve_level(explicit: Option<LevelFilter>) -> LevelFilter {
    explicit
        .or_else(|| {
            std::env::var(LOG_ENV_VAR)
                .ok()
                .and_then(|val| LevelFilter::from_str(val.trim()).ok())
        })
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr bridge. Later calls are no-ops.
pub fn init_log_bridge(explicit: Option<LevelFilter>) {
    let level = resolve_level(explicit);
    let logger = LOGGER.get_or_init(|| StderrLogger {
        level,
        out: Mutex::new(std::io::stderr()),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
