use std::sync::Arc;

use crate::{
    attributes::{
        messaging_attributes, notification_attributes, INTEGRATION_ID, INTEGRATION_ID_VALUE,
    },
    deeplink::DeeplinkParameters,
    sink_slot::SinkSlot,
    AnalyticsSink, Attributes, DispatcherConfig, EventKind, EventPayload, EventType, Result,
};

/// Forwards Batch lifecycle events to Mixpanel.
///
/// Build one with [`DispatcherConfig`], hand it to the host SDK and provide the sink before the
/// first event fires.
///
/// # Examples
/// ```
/// # use mixpanel_dispatcher::{Attributes, DispatcherConfig, EventType, Payload};
/// let mut config = DispatcherConfig::new();
/// config.sink(|event_name: &str, attributes: Attributes| {
///     println!("{event_name}: {attributes:?}");
/// });
/// let dispatcher = config.to_dispatcher();
///
/// dispatcher.dispatch(
///     EventType::NotificationOpen,
///     &Payload::default().with_deeplink("https://example.com?utm_campaign=spring"),
/// );
/// ```
pub struct Dispatcher {
    sink: SinkSlot,
}

impl Dispatcher {
    /// Create a new `Dispatcher` using the specified configuration.
    pub fn new(config: DispatcherConfig) -> Self {
        Dispatcher {
            sink: SinkSlot::with_sink(config.sink),
        }
    }

    /// Set the sink if none was provided at construction.
    ///
    /// Call it as early as possible during startup: events dispatched before are dropped. Only
    /// the first sink is kept, later calls return [`Error::SinkAlreadyConfigured`](crate::Error).
    pub fn set_sink(&self, sink: impl AnalyticsSink + Send + Sync + 'static) -> Result<()> {
        self.sink.set(Arc::new(sink)).inspect_err(|err| {
            log::warn!(target: "mixpanel_dispatcher", "ignoring analytics sink: {}", err);
        })
    }

    /// Whether a sink has been provided.
    pub fn has_sink(&self) -> bool {
        self.sink.get().is_some()
    }

    /// Callback for a new event of the Batch SDK.
    ///
    /// Never fails: a broken deeplink only loses its attribution data, and an event dispatched
    /// without a sink is logged and dropped.
    pub fn dispatch(&self, event_type: EventType, payload: &impl EventPayload) {
        let attributes = Dispatcher::attributes(event_type, payload);
        let event_name = event_type.event_name();

        let Some(sink) = self.sink.get() else {
            log::error!(target: "mixpanel_dispatcher",
                        event_name;
                        "tried to send a Mixpanel event, but no sink was set. Did you provide one with DispatcherConfig::sink() or Dispatcher::set_sink() during startup?");
            return;
        };

        log::trace!(target: "mixpanel_dispatcher",
                    event_name,
                    attributes:serde = &attributes;
                    "tracking event");
        sink.track(event_name, attributes);
    }

    /// Compute the attributes sent along with an event, without sending it.
    ///
    /// The `$source` integration marker is always set last, so the payload can never override
    /// it.
    pub fn attributes(event_type: EventType, payload: &impl EventPayload) -> Attributes {
        let mut attributes = match event_type.kind() {
            Some(EventKind::Notification) => notification_attributes(
                payload,
                &DeeplinkParameters::parse(payload.deeplink()),
            ),
            Some(EventKind::Messaging) => messaging_attributes(
                payload,
                &DeeplinkParameters::parse(payload.deeplink()),
            ),
            None => {
                log::debug!(target: "mixpanel_dispatcher",
                            "unknown event type, sending it without attribution");
                Attributes::new()
            }
        };

        attributes.insert(
            INTEGRATION_ID.to_owned(),
            Some(INTEGRATION_ID_VALUE.to_owned()),
        );
        attributes
    }
}
