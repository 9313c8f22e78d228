use crate::data::file_store::StoreError;

/// Where failed file store calls are reported.
///
/// The view never surfaces these as dialogs; the sink decides what a failure
/// turns into (a log record, a test assertion, ...).
pub trait Notifier {
    fn failure(&mut self, action: &str, error: &StoreError);
}

/// Writes every failure to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn failure(&mut self, action: &str, error: &StoreError) {
        tracing::warn!(action, %error, "file store call failed");
    }
}
