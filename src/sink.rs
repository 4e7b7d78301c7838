use crate::Attributes;

/// Receives the events produced by the dispatcher, usually a thin wrapper around a Mixpanel
/// client's `track` call.
///
/// Tracking is fire-and-forget: the dispatcher neither waits for nor interprets the outcome.
pub trait AnalyticsSink {
    /// Send one event with its properties.
    fn track(&self, event_name: &str, attributes: Attributes);
}

impl<T: Fn(&str, Attributes)> AnalyticsSink for T {
    fn track(&self, event_name: &str, attributes: Attributes) {
        self(event_name, attributes);
    }
}
