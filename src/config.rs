use std::sync::Arc;

use crate::{AnalyticsSink, Dispatcher};

/// Configuration for [`Dispatcher`].
#[derive(Default)]
pub struct DispatcherConfig {
    pub(crate) sink: Option<Arc<dyn AnalyticsSink + Send + Sync>>,
}

impl DispatcherConfig {
    /// Create a configuration without a sink. One can be provided later with
    /// [`Dispatcher::set_sink`].
    ///
    /// ```
    /// # use mixpanel_dispatcher::DispatcherConfig;
    /// DispatcherConfig::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink that receives Mixpanel events.
    ///
    /// Provide it as early as possible, before the first event fires: events dispatched without
    /// a sink are dropped.
    ///
    /// ```
    /// # use mixpanel_dispatcher::{Attributes, DispatcherConfig};
    /// let mut config = DispatcherConfig::new();
    /// config.sink(|event_name: &str, attributes: Attributes| {
    ///     println!("{event_name}: {attributes:?}");
    /// });
    /// ```
    pub fn sink(&mut self, sink: impl AnalyticsSink + Send + Sync + 'static) -> &mut Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Create a new [`Dispatcher`] using the specified configuration.
    ///
    /// ```
    /// # use mixpanel_dispatcher::{Dispatcher, DispatcherConfig};
    /// let dispatcher: Dispatcher = DispatcherConfig::new().to_dispatcher();
    /// ```
    pub fn to_dispatcher(self) -> Dispatcher {
        Dispatcher::new(self)
    }
}
