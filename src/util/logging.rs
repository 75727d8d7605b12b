//! Global `tracing` subscriber setup.
//!
//! The browser build has no wall clock for the fmt layer, so wasm32 goes
//! through the dioxus logger, which writes to the console.

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FILTER: &str = "pricing_packages=info";

/// Installs the global subscriber. Leaves an already installed one in place.
#[cfg(target_arch = "wasm32")]
pub fn init_logger() {
    let _ = dioxus::logger::init(dioxus::logger::tracing::Level::INFO);
}

/// Installs the global subscriber. Leaves an already installed one in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_first_subscriber() {
        init_logger();
        init_logger();
        tracing::info!(usd_per_eur = 1.07, "logger accepts events after re-init");
        assert!(tracing::dispatcher::has_been_set());
    }
}
