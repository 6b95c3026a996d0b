mod tracing_test;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

// Stage events only show up with e.g. RUST_LOG=pebble_pipe=trace.
pub(crate) fn init_tracing() {
    INIT_TRACING.call_once(|| {
        fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}
