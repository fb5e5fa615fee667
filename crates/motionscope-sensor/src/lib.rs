pub mod sim;
pub mod types;

use sim::DriveSim;
use std::time::Duration;
use tokio::sync::watch;
use types::SensorSnapshot;

/// Latest-value source of sensor readings.
///
/// The acquisition side publishes snapshots into a watch channel; the sampling
/// loop pulls the most recent one synchronously via [`snapshot`]. Pulls never
/// block and never see a torn value, and an acquisition layer running faster
/// than the sampling loop simply overwrites — there is no queue to backpressure.
///
/// [`snapshot`]: SensorHub::snapshot
pub struct SensorHub {
    snapshot_rx: watch::Receiver<SensorSnapshot>,
    _task: Option<tokio::task::JoinHandle<()>>,
}

impl SensorHub {
    /// Start the built-in simulated drive feed, publishing every `update_ms`.
    pub fn simulated(update_ms: u64) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(SensorSnapshot::default());
        let task = tokio::spawn(sim_feed_loop(snapshot_tx, update_ms));
        tracing::info!(update_ms, "Simulated sensor feed started");
        Self {
            snapshot_rx,
            _task: Some(task),
        }
    }

    /// Hub fed by an external acquisition layer through the returned sender.
    pub fn channel() -> (watch::Sender<SensorSnapshot>, Self) {
        let (snapshot_tx, snapshot_rx) = watch::channel(SensorSnapshot::default());
        (
            snapshot_tx,
            Self {
                snapshot_rx,
                _task: None,
            },
        )
    }

    /// Most recent snapshot (non-blocking).
    pub fn snapshot(&self) -> SensorSnapshot {
        *self.snapshot_rx.borrow()
    }
}

/// Background task: step the drive sim and publish each snapshot.
async fn sim_feed_loop(snapshot_tx: watch::Sender<SensorSnapshot>, update_ms: u64) {
    let sim = DriveSim::new(update_ms);
    let mut interval = tokio::time::interval(Duration::from_millis(update_ms));
    let mut step: u64 = 0;

    loop {
        interval.tick().await;
        if snapshot_tx.send(sim.sample(step)).is_err() {
            // Every hub dropped; nothing left to feed.
            break;
        }
        step += 1;
        if step % 1000 == 0 {
            tracing::debug!(step, "Sim sensor samples published");
        }
    }
}
