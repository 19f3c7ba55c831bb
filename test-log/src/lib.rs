use log::level_filters::LevelFilter;
use parking_lot::Once;
use seqlist_log::{Formatting, MaybeSystemTime, TargetsExt};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use seqlist_test_log_proc_macro::test;

static INITIALIZE: Once = Once::new();

/// Installs the test subscriber. Runs at most once per test binary; the
/// `#[test]` attribute calls it before every test body.
#[doc(hidden)]
pub fn initialize() {
    INITIALIZE.call_once(|| {
        // Another subscriber may already be installed, e.g. by a test
        // harness. Keep it in that case.
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .event_format(Formatting(MaybeSystemTime(false))),
            )
            .with(
                Targets::new()
                    .with_default(LevelFilter::INFO)
                    .with_seqlist_targets(LevelFilter::DEBUG)
                    .with_env(),
            )
            .try_init();
    });
}
