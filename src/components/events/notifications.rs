use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Error => "error",
        };
        f.write_str(s)
    }
}

/// A transient, auto-dismissing status message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub duration: Duration,
    pub closable: bool,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            title: title.into(),
            duration,
            closable: true,
        }
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// Anything that can show a toast to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Writes toasts to the log; used by the CLI
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => error!(kind = %toast.kind, "{}", toast.title),
            _ => info!(kind = %toast.kind, "{}", toast.title),
        }
    }
}

/// Forwards toasts to a channel for a UI loop to display
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        // The UI may already be gone
        if self.tx.send(toast).is_err() {
            tracing::debug!("Toast receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_forwards_toasts() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Toast::new(ToastKind::Info, "hello", Duration::from_secs(1)).closable(false));

        let toast = rx.try_recv().unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.title, "hello");
        assert!(!toast.closable);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Toast::new(ToastKind::Error, "lost", Duration::from_secs(3)));
    }
}
