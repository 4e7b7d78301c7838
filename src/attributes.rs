use std::collections::HashMap;

use crate::{deeplink::DeeplinkParameters, EventPayload};

/// Properties sent along with a Mixpanel event. `None` values are sent as `null`.
pub type Attributes = HashMap<String, Option<String>>;

/// Mixpanel key of the campaign.
pub const CAMPAIGN: &str = "utm_campaign";
/// Mixpanel key of the source.
pub const SOURCE: &str = "utm_source";
/// Mixpanel key of the medium.
pub const MEDIUM: &str = "utm_medium";
/// Mixpanel key of the content.
pub const CONTENT: &str = "utm_content";
/// Mixpanel key of the integration marker.
pub const INTEGRATION_ID: &str = "$source";

/// Key used to send the Batch tracking id.
pub const BATCH_TRACKING_ID: &str = "batch_tracking_id";

/// Key used to send the webview click analytics id.
pub const BATCH_WEBVIEW_ANALYTICS_ID: &str = "batch_webview_analytics_id";

/// Value of [`INTEGRATION_ID`] on every event.
pub const INTEGRATION_ID_VALUE: &str = "batch";

/// UTM names read from the deeplink and the custom payload.
const UTM_CAMPAIGN: &str = "utm_campaign";
const UTM_SOURCE: &str = "utm_source";
const UTM_MEDIUM: &str = "utm_medium";
const UTM_CONTENT: &str = "utm_content";

const PUSH_MEDIUM: &str = "push";
const IN_APP_MEDIUM: &str = "in-app";

/// Attributes of a push notification event.
///
/// `utm_medium` defaults to `push`. Campaign, medium, source and content are read from the
/// deeplink, then campaign, medium and source are overridden by the custom payload.
pub fn notification_attributes(
    payload: &impl EventPayload,
    deeplink: &DeeplinkParameters,
) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert(MEDIUM.to_owned(), Some(PUSH_MEDIUM.to_owned()));

    for (from, to) in [
        (UTM_CAMPAIGN, CAMPAIGN),
        (UTM_MEDIUM, MEDIUM),
        (UTM_SOURCE, SOURCE),
        (UTM_CONTENT, CONTENT),
    ] {
        copy_from_deeplink(deeplink, from, &mut attributes, to);
    }

    copy_from_custom_payload(payload, &mut attributes);
    attributes
}

/// Attributes of an in-app message event.
///
/// Campaign and tracking id come from the message tracking id and are always present, even
/// when `null`. `utm_medium` defaults to `in-app`. Content is read from the deeplink, then
/// campaign, medium and source are overridden by the custom payload.
pub fn messaging_attributes(
    payload: &impl EventPayload,
    deeplink: &DeeplinkParameters,
) -> Attributes {
    let tracking_id = payload.tracking_id().map(str::to_owned);

    let mut attributes = Attributes::new();
    attributes.insert(CAMPAIGN.to_owned(), tracking_id.clone());
    attributes.insert(MEDIUM.to_owned(), Some(IN_APP_MEDIUM.to_owned()));
    attributes.insert(BATCH_TRACKING_ID.to_owned(), tracking_id);

    if let Some(analytics_id) = payload.webview_analytics_id() {
        attributes.insert(
            BATCH_WEBVIEW_ANALYTICS_ID.to_owned(),
            Some(analytics_id.to_owned()),
        );
    }

    copy_from_deeplink(deeplink, UTM_CONTENT, &mut attributes, CONTENT);

    copy_from_custom_payload(payload, &mut attributes);
    attributes
}

/// Copy a deeplink parameter, the query string taking precedence over the fragment. Nothing is
/// inserted when neither has it.
fn copy_from_deeplink(
    deeplink: &DeeplinkParameters,
    from: &str,
    attributes: &mut Attributes,
    to: &str,
) {
    if let Some(value) = deeplink.get(from) {
        attributes.insert(to.to_owned(), Some(value.to_owned()));
    }
}

/// Custom payload has the highest priority. Content is never read from it.
fn copy_from_custom_payload(payload: &impl EventPayload, attributes: &mut Attributes) {
    for (from, to) in [
        (UTM_CAMPAIGN, CAMPAIGN),
        (UTM_MEDIUM, MEDIUM),
        (UTM_SOURCE, SOURCE),
    ] {
        if let Some(value) = payload.custom_value(from) {
            attributes.insert(to.to_owned(), Some(value.to_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{deeplink::DeeplinkParameters, Payload};

    use super::{messaging_attributes, notification_attributes, Attributes};

    fn attributes<const N: usize>(entries: [(&str, Option<&str>); N]) -> Attributes {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.map(str::to_owned)))
            .collect()
    }

    fn notification(payload: &Payload) -> Attributes {
        notification_attributes(
            payload,
            &DeeplinkParameters::parse(payload.deeplink.as_deref()),
        )
    }

    fn messaging(payload: &Payload) -> Attributes {
        messaging_attributes(
            payload,
            &DeeplinkParameters::parse(payload.deeplink.as_deref()),
        )
    }

    #[test]
    fn notification_without_data() {
        assert_eq!(
            notification(&Payload::default()),
            attributes([("utm_medium", Some("push"))])
        );
    }

    #[test]
    fn notification_query() {
        let payload = Payload::default().with_deeplink(
            "https://batch.com?utm_source=batchsdk&utm_medium=push-batch&utm_campaign=yoloswag&utm_content=button1",
        );
        assert_eq!(
            notification(&payload),
            attributes([
                ("utm_source", Some("batchsdk")),
                ("utm_medium", Some("push-batch")),
                ("utm_campaign", Some("yoloswag")),
                ("utm_content", Some("button1")),
            ])
        );
    }

    #[test]
    fn notification_fragment() {
        let payload = Payload::default().with_deeplink(
            "https://batch.com#utm_source=batch-sdk&utm_medium=pushbatch01&utm_campaign=154879548754&utm_content=notif001",
        );
        assert_eq!(
            notification(&payload),
            attributes([
                ("utm_source", Some("batch-sdk")),
                ("utm_medium", Some("pushbatch01")),
                ("utm_campaign", Some("154879548754")),
                ("utm_content", Some("notif001")),
            ])
        );
    }

    #[test]
    fn notification_ignores_custom_content() {
        let payload = Payload::default()
            .with_custom_value("utm_medium", "654987")
            .with_custom_value("utm_source", "jesuisuntest")
            .with_custom_value("utm_campaign", "heinhein")
            .with_custom_value("utm_content", "allo118218");
        assert_eq!(
            notification(&payload),
            attributes([
                ("utm_medium", Some("654987")),
                ("utm_source", Some("jesuisuntest")),
                ("utm_campaign", Some("heinhein")),
            ])
        );
    }

    #[test]
    fn notification_priority() {
        let payload = Payload::default()
            .with_deeplink("https://batch.com?utm_source=batchsdk&utm_campaign=yoloswag#utm_source=batch-sdk&utm_medium=pushbatch01&utm_campaign=154879548754&utm_content=notif001")
            .with_custom_value("utm_medium", "654987");
        assert_eq!(
            notification(&payload),
            attributes([
                ("utm_medium", Some("654987")),
                ("utm_source", Some("batchsdk")),
                ("utm_campaign", Some("yoloswag")),
                ("utm_content", Some("notif001")),
            ])
        );
    }

    #[test]
    fn custom_payload_beats_query_and_fragment() {
        let payload = Payload::default()
            .with_deeplink("https://batch.com?utm_medium=query#utm_medium=fragment")
            .with_custom_value("utm_medium", "custom");
        assert_eq!(notification(&payload)["utm_medium"].as_deref(), Some("custom"));
    }

    #[test]
    fn notification_unusable_deeplink_keeps_defaults() {
        for deeplink in ["https://[batch.com?utm_medium=x", "mailto:a@batch.com?utm_medium=x"] {
            let payload = Payload::default()
                .with_deeplink(deeplink)
                .with_custom_value("utm_source", "custom");
            assert_eq!(
                notification(&payload),
                attributes([("utm_medium", Some("push")), ("utm_source", Some("custom"))])
            );
        }
    }

    #[test]
    fn messaging_without_data() {
        assert_eq!(
            messaging(&Payload::default()),
            attributes([
                ("utm_medium", Some("in-app")),
                ("utm_campaign", None),
                ("batch_tracking_id", None),
            ])
        );
    }

    #[test]
    fn messaging_tracking_id() {
        let payload = Payload::default().with_tracking_id("jesuisunid");
        assert_eq!(
            messaging(&payload),
            attributes([
                ("utm_medium", Some("in-app")),
                ("utm_campaign", Some("jesuisunid")),
                ("batch_tracking_id", Some("jesuisunid")),
            ])
        );
    }

    #[test]
    fn messaging_webview_analytics_id() {
        let payload = Payload::default().with_webview_analytics_id("jesuisunbouton");
        assert_eq!(
            messaging(&payload),
            attributes([
                ("utm_medium", Some("in-app")),
                ("utm_campaign", None),
                ("batch_tracking_id", None),
                ("batch_webview_analytics_id", Some("jesuisunbouton")),
            ])
        );
    }

    #[test]
    fn messaging_reads_only_content_from_deeplink() {
        let payload = Payload::default()
            .with_tracking_id("jesuisunid")
            .with_deeplink("https://batch.com?utm_content=jesuisuncontent&utm_source=query&utm_medium=query#utm_campaign=fragment");
        assert_eq!(
            messaging(&payload),
            attributes([
                ("utm_medium", Some("in-app")),
                ("utm_campaign", Some("jesuisunid")),
                ("batch_tracking_id", Some("jesuisunid")),
                ("utm_content", Some("jesuisuncontent")),
            ])
        );
    }

    #[test]
    fn messaging_content_priority() {
        let payload = Payload::default()
            .with_tracking_id("jesuisunid")
            .with_deeplink(
                "https://batch.com?utm_content=jesuisuncontent002#utm_content=jesuisuncontent015",
            );
        assert_eq!(
            messaging(&payload)["utm_content"].as_deref(),
            Some("jesuisuncontent002")
        );
    }

    #[test]
    fn messaging_custom_payload_overrides_tracking_id() {
        let payload = Payload::default()
            .with_tracking_id("jesuisunid")
            .with_custom_value("utm_campaign", "custom-campaign")
            .with_custom_value("utm_source", "custom-source")
            .with_custom_value("utm_content", "ignored");
        assert_eq!(
            messaging(&payload),
            attributes([
                ("utm_medium", Some("in-app")),
                ("utm_campaign", Some("custom-campaign")),
                ("utm_source", Some("custom-source")),
                ("batch_tracking_id", Some("jesuisunid")),
            ])
        );
    }
}
