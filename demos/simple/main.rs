use mixpanel_dispatcher::{Attributes, DispatcherConfig, EventType, Payload};

pub fn main() {
    env_logger::init();

    // In a real application the sink forwards to a Mixpanel client. Provide it during startup,
    // events dispatched before are dropped.
    let mut config = DispatcherConfig::new();
    config.sink(|event_name: &str, attributes: Attributes| {
        println!(
            "{} {}",
            event_name,
            serde_json::to_string(&attributes).unwrap_or_default()
        );
    });
    let dispatcher = config.to_dispatcher();

    let tag = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "NOTIFICATION_OPEN".to_owned());
    let event_type: EventType = tag.parse().unwrap_or(EventType::Unknown);

    let payload = Payload::default()
        .with_tracking_id("welcome-message")
        .with_deeplink("https://example.com/shop?utm_source=newsletter#utm_content=hero-banner")
        .with_custom_value("utm_campaign", "spring-sale");

    dispatcher.dispatch(event_type, &payload);
}
