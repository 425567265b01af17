use ct_core::BROADCAST_HZ;
use std::time::Duration;
use tokio::time::Interval;
use tokio::time::MissedTickBehavior;

/// Configuration for the broadcast cadence.
#[derive(Debug, Clone, Copy)]
pub struct TickConfig {
    pub period: Duration,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1) / BROADCAST_HZ,
        }
    }
}

impl TickConfig {
    /// Builds the room's broadcast interval. Ticks that fall behind are
    /// skipped rather than burst, so a stalled task never floods clients
    /// with stale snapshots.
    pub fn interval(&self) -> Interval {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_matches_rate() {
        let config = TickConfig::default();
        assert_eq!(config.period, Duration::from_secs(1) / 240);
    }
    #[tokio::test(start_paused = true)]
    async fn interval_ticks_at_period() {
        let config = TickConfig {
            period: Duration::from_millis(100),
        };
        let mut interval = config.interval();
        interval.tick().await;
        let before = tokio::time::Instant::now();
        interval.tick().await;
        assert_eq!(before.elapsed(), Duration::from_millis(100));
    }
}
