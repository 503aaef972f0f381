use std::sync::Arc;

/// A logger type which is called with various information regarding marker lifecycle,
/// submission and solving.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Creates a logger which drops all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_| ())
}

/// Creates a logger which writes messages to stderr with the given prefix.
pub fn create_stderr_logger(prefix: &str) -> InfoLogger {
    let prefix = prefix.to_string();
    Arc::new(move |msg: &str| eprintln!("[{prefix}] {msg}"))
}
