use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise run summaries are shown at `info`
/// and per-run solver details at `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "info,undead=debug,undead_core=debug,undead_solvers=debug,undead_observers=debug"
        } else {
            "info"
        })
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
