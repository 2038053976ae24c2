//! User-facing failure notifications.

use serde::Serialize;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// The fixed messages a cart operation can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toast {
    /// Requested quantity is above the stock ceiling (add or update).
    OutOfStock,
    /// Adding a product failed.
    AddFailed,
    /// Removing a product failed.
    RemoveFailed,
    /// Changing a product's quantity failed.
    UpdateFailed,
}

impl Toast {
    /// The text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Toast::OutOfStock => "Requested quantity unavailable in stock",
            Toast::AddFailed => "Error adding product",
            Toast::RemoveFailed => "Error removing product",
            Toast::UpdateFailed => "Error changing product quantity",
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Presentation layer for error toasts. Fire and forget.
pub trait Notifier: Send + Sync {
    fn error(&self, toast: Toast);
}

/// Notifier that keeps every toast it receives.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts received so far, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the received toasts.
    pub fn take(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for MemoryNotifier {
    fn error(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let all = [
            Toast::OutOfStock,
            Toast::AddFailed,
            Toast::RemoveFailed,
            Toast::UpdateFailed,
        ];
        let unique: std::collections::HashSet<_> = all.iter().map(Toast::message).collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_memory_notifier_take_drains() {
        let notifier = MemoryNotifier::new();
        notifier.error(Toast::AddFailed);
        notifier.error(Toast::OutOfStock);
        assert_eq!(notifier.take(), vec![Toast::AddFailed, Toast::OutOfStock]);
        assert!(notifier.toasts().is_empty());
    }
}
