//! Diagnostic logging for the CLI.

use std::sync::Once;

/// Environment variable holding the filter directives, e.g. `chatter_eval=debug`.
pub const LOG_ENV: &str = "CHATTER_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped stderr subscriber when `CHATTER_LOG` (or, failing
/// that, `RUST_LOG`) is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let directives = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(EnvFilter::new(directives))
                .init();
        }
    });
}
