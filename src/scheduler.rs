use std::future::Future;
use std::time::Duration;

use chrono::Local;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::pipeline::Pipeline;
use crate::render::format_timestamp;

/// Drives [`Pipeline::run_once`] on a fixed pause measured from the end of
/// one pass to the start of the next.
pub struct Scheduler {
    pipeline: Pipeline,
    pause: Duration,
}

impl Scheduler {
    pub fn new(pipeline: Pipeline, pause: Duration) -> Self {
        Self { pipeline, pause }
    }

    /// Run passes until `shutdown` resolves. A pass that has started always
    /// finishes, so the dashboard is never left mid-write. Returns the number
    /// of completed passes.
    pub async fn run_until<F>(&self, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut passes = 0;
        info!(
            "Rendering {} from {} every {} seconds",
            self.pipeline.config().output_file,
            self.pipeline.config().urls_file,
            self.pause.as_secs()
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = std::future::ready(()) => {}
            }

            let captured_at = Local::now().naive_local();
            info!("--- Starting new pass at {} ---", format_timestamp(&captured_at));

            let report = self.pipeline.run_once(captured_at).await;
            passes += 1;

            if report.written {
                debug!("Dashboard is {} bytes", report.document.len());
            } else {
                warn!("Dashboard not updated this pass; previous output kept");
            }
            info!(
                "Pass completed: {} priced, {} failed, waiting {} seconds",
                report.found(),
                report.failed(),
                self.pause.as_secs()
            );

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = sleep(self.pause) => {}
            }
        }

        info!("Stopping after {} passes", passes);
        passes
    }
}
