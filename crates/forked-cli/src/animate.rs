//! Terminal sweep animation for the score meter.

use forked_render::{frame_value, GAUGE_DURATION_MS};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tokio::task::{AbortHandle, JoinHandle};

/// Frame interval, roughly the 60fps cadence of requestAnimationFrame.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Drives the eased 0→score sweep on the terminal.
///
/// At most one sweep runs at a time: starting a new one aborts any sweep
/// still in flight, so two renders never write over each other's frames.
#[derive(Default)]
pub struct MeterAnimator {
    current: Option<AbortHandle>,
}

impl MeterAnimator {
    /// Create an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sweep from 0 to `score`, rewriting one line in place.
    ///
    /// Returns the task handle; await it to hold the view until the
    /// sweep settles.
    pub fn start(&mut self, score: u8, label: String) -> JoinHandle<()> {
        if let Some(previous) = self.current.take() {
            previous.abort();
        }

        let handle = tokio::spawn(async move {
            let started = Instant::now();
            loop {
                let elapsed = started.elapsed().as_millis() as u64;
                let value = frame_value(score, elapsed, GAUGE_DURATION_MS);
                print!("\r{} {:>3}", label, value);
                io::stdout().flush().ok();

                if elapsed >= GAUGE_DURATION_MS {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;
            }
            println!();
        });

        self.current = Some(handle.abort_handle());
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_runs_to_completion() {
        let mut animator = MeterAnimator::new();
        let handle = animator.start(42, "score:".to_string());
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_new_sweep_aborts_previous() {
        let mut animator = MeterAnimator::new();
        let first = animator.start(80, "score:".to_string());
        let second = animator.start(40, "score:".to_string());

        let first_result = first.await;
        assert!(first_result.unwrap_err().is_cancelled());
        assert!(second.await.is_ok());
    }
}
