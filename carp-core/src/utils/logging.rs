use std::sync::Arc;

/// A logger type which is called with various information regarding the progress of a
/// validation run.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which discards every message. This is the default: the engine
/// itself performs no process level side effects unless a logger is injected.
pub fn create_noop_logger() -> InfoLogger {
    Arc::new(|_| {})
}
