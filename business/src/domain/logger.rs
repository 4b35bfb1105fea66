/// Logging port used by the application layer.
///
/// Adapters decide where messages end up; use cases only pass plain text.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
