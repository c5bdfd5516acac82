//! Reusable TUI widgets

pub mod notification;

pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
