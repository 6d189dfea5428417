//! Fixed-rate poll task.
//!
//! One dedicated tokio task per bridge runs the tick cycle. Because the
//! task awaits each cycle before asking the interval for the next tick,
//! invocations never overlap; missed ticks are skipped, not bursted.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running periodic poll task.
///
/// Dropping the handle without calling [`stop`](PollTask::stop) leaves the
/// task running detached; bridges always stop it explicitly so that
/// source/sink mutation never races an in-flight tick.
#[derive(Debug)]
pub struct PollTask {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PollTask {
    /// Spawn a task invoking `cycle` every `period`.
    ///
    /// The first cycle runs immediately; subsequent cycles fire at the
    /// fixed period.
    pub fn spawn<F, Fut>(period: Duration, mut cycle: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval.tick() => cycle().await,
                    _ = stop_rx.changed() => break,
                }
            }
        });

        Self { stop_tx, handle }
    }

    /// Whether the task is still running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the task and wait for it to finish.
    ///
    /// Returns only after the task has exited, so no tick is in flight
    /// afterwards.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.handle.await;
    }
}
