use tracing::Level;

pub(crate) fn log_level(verbose: bool) -> Level {
    if verbose { Level::INFO } else { Level::WARN }
}

// setup_tracing installs the fmt subscriber once per process, writing to stderr.
pub fn setup_tracing(verbose: bool, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.with_ansi(false).without_time().json().try_init()
    } else {
        builder.try_init()
    };
}
