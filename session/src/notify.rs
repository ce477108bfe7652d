use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyOptions {
    /// How long the notification should stay visible, if the rendering side
    /// supports timed dismissal.
    pub auto_close: Option<Duration>,
}

/// The outward notification contract. Fire-and-forget; nothing in the core
/// consumes a return value from it.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotifyKind, message: &str, options: NotifyOptions);
}

/// Notifier for terminal use; renders through the logging layer.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotifyKind, message: &str, _options: NotifyOptions) {
        match kind {
            NotifyKind::Success => tracing::info!("{message}"),
            NotifyKind::Error => tracing::error!("{message}"),
        }
    }
}
