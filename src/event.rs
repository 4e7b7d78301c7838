use std::{convert::Infallible, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Event names sent to Mixpanel.
const NOTIFICATION_DISPLAY_NAME: &str = "batch_notification_display";
const NOTIFICATION_OPEN_NAME: &str = "batch_notification_open";
const NOTIFICATION_DISMISS_NAME: &str = "batch_notification_dismiss";
const MESSAGING_SHOW_NAME: &str = "batch_in_app_show";
const MESSAGING_CLOSE_NAME: &str = "batch_in_app_close";
const MESSAGING_AUTO_CLOSE_NAME: &str = "batch_in_app_auto_close";
const MESSAGING_CLOSE_ERROR_NAME: &str = "batch_in_app_close_error";
const MESSAGING_CLICK_NAME: &str = "batch_in_app_click";
const MESSAGING_WEBVIEW_CLICK_NAME: &str = "batch_in_app_webview_click";
const UNKNOWN_EVENT_NAME: &str = "batch_unknown";

/// Lifecycle event emitted by the Batch SDK.
///
/// Tags are (de)serialized in `SCREAMING_SNAKE_CASE`, the way the host SDK names them. Any tag
/// this crate does not know about becomes [`EventType::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A push notification was displayed.
    NotificationDisplay,
    /// A push notification was opened.
    NotificationOpen,
    /// A push notification was dismissed.
    NotificationDismiss,
    /// An in-app message was shown.
    MessagingShow,
    /// An in-app message was closed by the user.
    MessagingClose,
    /// An in-app message was closed by its auto-close timer.
    MessagingAutoClose,
    /// An in-app message was closed because of an error.
    MessagingCloseError,
    /// A button of an in-app message was clicked.
    MessagingClick,
    /// A button inside a webview in-app message was clicked.
    MessagingWebviewClick,
    /// Any tag outside of the known set.
    #[serde(other)]
    Unknown,
}

/// Which attribute set an event populates.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Push notification events.
    #[display(fmt = "notification")]
    Notification,
    /// In-app message events.
    #[display(fmt = "messaging")]
    Messaging,
}

impl EventType {
    /// All known event types, in declaration order.
    pub const KNOWN: [EventType; 9] = [
        EventType::NotificationDisplay,
        EventType::NotificationOpen,
        EventType::NotificationDismiss,
        EventType::MessagingShow,
        EventType::MessagingClose,
        EventType::MessagingAutoClose,
        EventType::MessagingCloseError,
        EventType::MessagingClick,
        EventType::MessagingWebviewClick,
    ];

    /// Name of the Mixpanel event for this type. Unknown types map to `batch_unknown`.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::NotificationDisplay => NOTIFICATION_DISPLAY_NAME,
            Self::NotificationOpen => NOTIFICATION_OPEN_NAME,
            Self::NotificationDismiss => NOTIFICATION_DISMISS_NAME,
            Self::MessagingShow => MESSAGING_SHOW_NAME,
            Self::MessagingClose => MESSAGING_CLOSE_NAME,
            Self::MessagingAutoClose => MESSAGING_AUTO_CLOSE_NAME,
            Self::MessagingCloseError => MESSAGING_CLOSE_ERROR_NAME,
            Self::MessagingClick => MESSAGING_CLICK_NAME,
            Self::MessagingWebviewClick => MESSAGING_WEBVIEW_CLICK_NAME,
            Self::Unknown => UNKNOWN_EVENT_NAME,
        }
    }

    /// Kind of the event, or `None` for [`EventType::Unknown`].
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Self::NotificationDisplay | Self::NotificationOpen | Self::NotificationDismiss => {
                Some(EventKind::Notification)
            }
            Self::MessagingShow
            | Self::MessagingClose
            | Self::MessagingAutoClose
            | Self::MessagingCloseError
            | Self::MessagingClick
            | Self::MessagingWebviewClick => Some(EventKind::Messaging),
            Self::Unknown => None,
        }
    }

    /// Whether this is a push notification event.
    pub fn is_notification_event(&self) -> bool {
        self.kind() == Some(EventKind::Notification)
    }

    /// Whether this is an in-app message event.
    pub fn is_messaging_event(&self) -> bool {
        self.kind() == Some(EventKind::Messaging)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}

impl FromStr for EventType {
    type Err = Infallible;

    /// Parse a host SDK tag such as `NOTIFICATION_OPEN`. Never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "NOTIFICATION_DISPLAY" => Self::NotificationDisplay,
            "NOTIFICATION_OPEN" => Self::NotificationOpen,
            "NOTIFICATION_DISMISS" => Self::NotificationDismiss,
            "MESSAGING_SHOW" => Self::MessagingShow,
            "MESSAGING_CLOSE" => Self::MessagingClose,
            "MESSAGING_AUTO_CLOSE" => Self::MessagingAutoClose,
            "MESSAGING_CLOSE_ERROR" => Self::MessagingCloseError,
            "MESSAGING_CLICK" => Self::MessagingClick,
            "MESSAGING_WEBVIEW_CLICK" => Self::MessagingWebviewClick,
            _ => Self::Unknown,
        })
    }
}
