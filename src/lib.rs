//! Mixpanel event dispatcher for the Batch SDK.
//!
//! # Overview
//!
//! The Batch SDK reports push notification and in-app message lifecycle events ([`EventType`]).
//! A [`Dispatcher`] turns each of them into a Mixpanel event: a fixed event name plus a flat map
//! of [`Attributes`] carrying UTM attribution (`utm_campaign`, `utm_source`, `utm_medium`,
//! `utm_content`), then hands it to an [`AnalyticsSink`].
//!
//! Attribution is resolved from three sources, highest priority first:
//!
//! 1. the custom payload of the push or message ([`EventPayload::custom_value`]);
//! 2. the query string of the deeplink, matched case-insensitively and percent-decoded;
//! 3. the fragment of the deeplink (`#utm_source=...&utm_medium=...`), whose values are kept
//!    verbatim.
//!
//! Every event also carries `$source = "batch"`.
//!
//! # Error Handling
//!
//! Dispatching never fails. An unusable deeplink only loses its attribution data, and events
//! dispatched before a sink is set are dropped. Both cases are logged. The [`Error`] enum is
//! returned by the few operations that report problems to the caller.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with the
//! `mixpanel_dispatcher` target. Consider integrating a `log`-compatible logger implementation
//! to see dropped events and broken deeplinks.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod attributes;
mod config;
mod deeplink;
mod dispatcher;
mod error;
mod event;
mod payload;
mod sink;
mod sink_slot;

pub use attributes::{
    messaging_attributes, notification_attributes, Attributes, BATCH_TRACKING_ID,
    BATCH_WEBVIEW_ANALYTICS_ID, CAMPAIGN, CONTENT, INTEGRATION_ID, INTEGRATION_ID_VALUE, MEDIUM,
    SOURCE,
};
pub use config::DispatcherConfig;
pub use deeplink::{DeeplinkParameters, FragmentParameters, QueryParameters};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use event::{EventKind, EventType};
pub use payload::{EventPayload, Payload};
pub use sink::AnalyticsSink;
