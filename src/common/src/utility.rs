use tracing::Level;

/// Init logging, ignore error if already set.
///
/// Output goes to stderr so it never interleaves with console narration.
pub fn init_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
