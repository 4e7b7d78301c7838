use std::sync::{Arc, OnceLock};

use crate::{AnalyticsSink, Error, Result};

pub(crate) type SharedSink = Arc<dyn AnalyticsSink + Send + Sync>;

/// `SinkSlot` holds the analytics sink. It starts empty, can be filled exactly once, and is then
/// read without locking by any number of threads.
pub(crate) struct SinkSlot {
    sink: OnceLock<SharedSink>,
}

impl SinkSlot {
    pub fn with_sink(sink: Option<SharedSink>) -> Self {
        Self {
            sink: sink.map(OnceLock::from).unwrap_or_default(),
        }
    }

    pub fn get(&self) -> Option<&SharedSink> {
        self.sink.get()
    }

    /// Set the sink. Fails if a sink is already set, keeping the previous one.
    pub fn set(&self, sink: SharedSink) -> Result<()> {
        self.sink.set(sink).map_err(|_| Error::SinkAlreadyConfigured)
    }
}
