use core::{future, time::Duration};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// A cancellable recurring timer. Once stopped, [`Timer::tick`] never resolves,
/// which makes it safe to poll from a `select!` loop at all times.
pub struct Timer {
    period: Duration,
    interval: Option<Interval>,
}

impl Timer {
    pub const SECOND: Duration = Duration::from_secs(1);

    pub const fn new(period: Duration) -> Self {
        Self { period, interval: None }
    }

    /// (Re)starts the timer. The first tick arrives one full period from now.
    pub fn start(&mut self) {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub const fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending().await,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Self::SECOND)
    }
}
