//! # Outcome Notifications
//!
//! Converts cart outcomes and rejections into structured, displayable
//! notifications.
//!
//! ## Separation of Concerns
//! The cart's mutation functions return pure outcome values and never touch
//! a rendering surface. This module is the single place that turns those
//! values into `{ kind, severity, message }` payloads; how the host UI shows
//! them (toast, banner, inline) is entirely its own concern. That keeps the
//! cart testable without a rendering environment.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartOutcome;
use crate::error::CartError;

/// How prominently the host UI should render a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Info,
    Error,
}

/// Machine-readable notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum NotificationKind {
    Added,
    Updated,
    Removed,
    Cleared,
    InsufficientStock,
    InvalidQuantity,
}

/// A structured signal for the notification surface.
///
/// ## Serialization
/// ```json
/// { "kind": "insufficientStock", "severity": "error",
///   "message": "only 3 copies of \"...\" are available (requested 5)" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub message: String,
}

impl From<&CartOutcome> for Notification {
    fn from(outcome: &CartOutcome) -> Self {
        match outcome {
            CartOutcome::Added { title } => Notification {
                kind: NotificationKind::Added,
                severity: Severity::Info,
                message: format!("\"{title}\" added to cart"),
            },
            CartOutcome::Updated { title, quantity } => Notification {
                kind: NotificationKind::Updated,
                severity: Severity::Info,
                message: format!("quantity of \"{title}\" updated to {quantity}"),
            },
            CartOutcome::Removed { title } => Notification {
                kind: NotificationKind::Removed,
                severity: Severity::Info,
                message: format!("\"{title}\" removed from cart"),
            },
            CartOutcome::Cleared => Notification {
                kind: NotificationKind::Cleared,
                severity: Severity::Info,
                message: "all items cleared from cart".to_string(),
            },
        }
    }
}

impl From<&CartError> for Notification {
    fn from(error: &CartError) -> Self {
        let kind = match error {
            CartError::InsufficientStock { .. } => NotificationKind::InsufficientStock,
            CartError::InvalidQuantity { .. } => NotificationKind::InvalidQuantity,
        };
        Notification {
            kind,
            severity: Severity::Error,
            message: error.to_string(),
        }
    }
}

impl Notification {
    /// Collapses a mutation result into its notification, if it produced one.
    ///
    /// Quiet successes (`Ok(None)` from in-place quantity edits, idempotent
    /// removes of absent lines) yield nothing.
    pub fn from_result(result: &Result<Option<CartOutcome>, CartError>) -> Option<Notification> {
        match result {
            Ok(Some(outcome)) => Some(Notification::from(outcome)),
            Ok(None) => None,
            Err(error) => Some(Notification::from(error)),
        }
    }
}
