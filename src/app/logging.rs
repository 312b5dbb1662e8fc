use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the diagnostic subscriber (stderr, compact).
///
/// User-facing progress is printed directly; this only carries debug detail
/// such as interpreter command lines and exit statuses.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cordboot=debug,warn")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
