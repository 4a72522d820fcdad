use crate::core::counter::MovieCounter;
use crate::core::{ConfigProvider, MovieCount, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CountEngine<S: Storage, C: ConfigProvider> {
    counter: MovieCounter<S, C>,
    monitor: SystemMonitor,
}

impl<S: Storage, C: ConfigProvider> CountEngine<S, C> {
    /// Monitoring follows the counter's config.
    pub fn new(counter: MovieCounter<S, C>) -> Self {
        let enable_monitoring = counter.config().monitor();
        Self::new_with_monitoring(counter, enable_monitoring)
    }

    pub fn new_with_monitoring(counter: MovieCounter<S, C>, enable_monitoring: bool) -> Self {
        Self {
            counter,
            monitor: SystemMonitor::new(enable_monitoring),
        }
    }

    pub fn run(&self) -> Result<MovieCount> {
        tracing::info!("Counting movies in {}", self.counter.input_path());
        self.monitor.log_stats("Start");

        let text = self.counter.read()?;
        self.monitor.log_stats("Read");

        let document = self.counter.decode(&text)?;
        tracing::debug!("Decoded top-level JSON {}", document.kind());
        self.monitor.log_stats("Decode");

        let result = self.counter.measure(document)?;
        tracing::info!("Counted {} movie records", result.count);
        self.monitor.log_stats("Measure");

        self.monitor.log_final_stats();
        Ok(result)
    }
}
