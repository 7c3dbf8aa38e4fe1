// src/logging.rs
use tracing_subscriber::filter::LevelFilter;

/// Map `-v` occurrences to a maximum level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber. `log` records from the library crates are
/// bridged into it. A second call is a no-op.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
