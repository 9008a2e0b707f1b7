//! Opt-in tracing output.
//!
//! Nothing is installed unless `LISPY_LOG` (or, failing that, `RUST_LOG`)
//! holds a filter directive, so a normal run pays nothing for the
//! instrumentation in the evaluator.

use std::sync::Once;

/// Environment variable read for the filter directive.
pub const LOG_ENV: &str = "LISPY_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
///
/// Spans are rendered as an indented tree on stderr, which keeps nested
/// `evaluate`/`apply` calls readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(true);
            tracing_subscriber::registry().with(filter).with(tree).init();
        }
    });
}
