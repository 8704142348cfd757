//! Alert registry and notification feed
//!
//! In-memory per-stock notification rules plus the ephemeral toast feed.
//! Nothing here persists or dispatches anything; the SMS/Email wording shown
//! to the user is cosmetic.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::stocks::Horizon;

/// A user-configured notification rule for one stock
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: Uuid,
    pub ticker: String,
    pub horizon: Horizon,
    /// Confidence threshold, 1-100
    pub threshold: u8,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied to an existing alert
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertUpdate {
    pub horizon: Option<Horizon>,
    pub threshold: Option<u8>,
    pub active: Option<bool>,
}

/// Severity of a notification toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Info,
}

/// An ephemeral in-app notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Owns all alerts and notifications for the session
#[derive(Debug, Default)]
pub struct AlertRegistry {
    alerts: Vec<Alert>,
    /// Newest first
    notifications: Vec<Notification>,
}

impl AlertRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Append a new active alert and return its id. The registry permits
    /// several alerts for the same ticker; views that want at most one are
    /// expected to check `active_alert_for` first.
    pub fn add(&mut self, ticker: &str, horizon: Horizon, threshold: u8) -> Uuid {
        let alert = Alert {
            id: Uuid::new_v4(),
            ticker: ticker.to_string(),
            horizon,
            threshold: threshold.clamp(1, 100),
            active: true,
            created_at: Utc::now(),
        };
        let id = alert.id;
        self.alerts.push(alert);
        id
    }

    /// Remove an alert; absent ids are a no-op
    pub fn remove(&mut self, id: Uuid) {
        self.alerts.retain(|a| a.id != id);
    }

    /// Merge `update` into the matching alert; absent ids are a no-op
    pub fn update(&mut self, id: Uuid, update: AlertUpdate) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            if let Some(horizon) = update.horizon {
                alert.horizon = horizon;
            }
            if let Some(threshold) = update.threshold {
                alert.threshold = threshold.clamp(1, 100);
            }
            if let Some(active) = update.active {
                alert.active = active;
            }
        }
    }

    /// First active alert for a ticker, if any
    pub fn active_alert_for(&self, ticker: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.ticker == ticker && a.active)
    }

    /// Push a notification onto the front of the feed and return its id
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            timestamp: Utc::now(),
            read: false,
        };
        let id = notification.id;
        self.notifications.insert(0, notification);
        id
    }

    pub fn mark_read(&mut self, id: Uuid) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}
