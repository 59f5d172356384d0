//! Logger setup
//!
//! `env_logger` behind the `log` facade. `RUST_LOG` wins when set.

use std::sync::Once;

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Install the logger. Only the first call has any effect.
pub fn init_logging() {
    INIT.call_once(|| {
        let env = Env::default().default_filter_or(DEFAULT_FILTER);
        if let Err(e) = Builder::from_env(env).format_timestamp_millis().try_init() {
            eprintln!("keeping the existing logger: {}", e);
        }
        log::debug!("logging initialized");
    });
}
