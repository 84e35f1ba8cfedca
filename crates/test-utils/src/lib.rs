pub mod builders;
pub mod fake_executor;
pub mod recording_sink;

use std::sync::Once;
use msbuild_task::logging::{build_filter, LOG_ENV_VAR};
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Install a per-test subscriber once per test binary.
///
/// Honors `MSBUILD_TASK_LOG` the same way the binary does; output is
/// captured and shown only for failing tests unless run with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_value = std::env::var(LOG_ENV_VAR).ok();
        let _ = fmt()
            .with_env_filter(build_filter(None, env_value.as_deref()))
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Await `f`, panicking if it takes longer than 10 seconds.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(10), f)
        .await
        .expect("Test timed out after 10 seconds")
}
