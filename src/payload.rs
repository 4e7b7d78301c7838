use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read-only view of the data attached to a Batch lifecycle event.
///
/// Implement this on top of your host SDK's payload type, or use [`Payload`].
pub trait EventPayload {
    /// Tracking identifier of an in-app message.
    fn tracking_id(&self) -> Option<&str>;

    /// Analytics identifier of the clicked webview button, for
    /// [`EventType::MessagingWebviewClick`](crate::EventType::MessagingWebviewClick) only.
    fn webview_analytics_id(&self) -> Option<&str>;

    /// Raw deeplink. May be surrounded by whitespace or not be a URL at all.
    fn deeplink(&self) -> Option<&str>;

    /// Value of a key of the custom payload.
    fn custom_value(&self, key: &str) -> Option<&str>;
}

/// An owned [`EventPayload`].
///
/// ```
/// # use mixpanel_dispatcher::Payload;
/// let payload = Payload::default()
///     .with_deeplink("https://example.com?utm_campaign=spring")
///     .with_custom_value("utm_source", "newsletter");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// Tracking identifier of an in-app message.
    #[serde(default)]
    pub tracking_id: Option<String>,
    /// Analytics identifier of a clicked webview button.
    #[serde(default, rename = "webViewAnalyticsId")]
    pub webview_analytics_id: Option<String>,
    /// Raw deeplink.
    #[serde(default)]
    pub deeplink: Option<String>,
    /// Custom key/value payload.
    #[serde(default)]
    pub custom_payload: HashMap<String, String>,
}

impl Payload {
    /// Set the tracking id.
    pub fn with_tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }

    /// Set the webview analytics id.
    pub fn with_webview_analytics_id(mut self, analytics_id: impl Into<String>) -> Self {
        self.webview_analytics_id = Some(analytics_id.into());
        self
    }

    /// Set the deeplink.
    pub fn with_deeplink(mut self, deeplink: impl Into<String>) -> Self {
        self.deeplink = Some(deeplink.into());
        self
    }

    /// Add a custom payload entry.
    pub fn with_custom_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_payload.insert(key.into(), value.into());
        self
    }
}

impl EventPayload for Payload {
    fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref()
    }

    fn webview_analytics_id(&self) -> Option<&str> {
        self.webview_analytics_id.as_deref()
    }

    fn deeplink(&self) -> Option<&str> {
        self.deeplink.as_deref()
    }

    fn custom_value(&self, key: &str) -> Option<&str> {
        self.custom_payload.get(key).map(String::as_str)
    }
}
