//! The trigger button: debouncing, press-then-release detection, and the
//! monitor loop that runs the selected payload on every completed click.

use crate::engine::Engine;
use anyhow::Result;
use std::io::BufRead;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;
use std::time::Duration;
use tokio::time::Instant;

pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(10);
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// An active-low push button: high when released, low while pressed.
pub trait Button {
    fn is_high(&mut self) -> bool;

    /// Whether the button can still change state. The monitor stops once this
    /// turns false.
    fn is_connected(&self) -> bool {
        true
    }
}

/// Reports an edge only after the raw input has held steady for
/// [`DEBOUNCE_INTERVAL`].
#[derive(Debug)]
pub struct Debouncer {
    stable: bool,
    unstable: bool,
    changed_at: Instant,
    fell: bool,
    rose: bool,
}

impl Debouncer {
    pub fn new(initial: bool, now: Instant) -> Self {
        Self {
            stable: initial,
            unstable: initial,
            changed_at: now,
            fell: false,
            rose: false,
        }
    }

    /// Feed one raw sample.
    pub fn update(&mut self, raw: bool, now: Instant) {
        self.fell = false;
        self.rose = false;
        if raw != self.unstable {
            self.unstable = raw;
            self.changed_at = now;
        } else if raw != self.stable && now.duration_since(self.changed_at) >= DEBOUNCE_INTERVAL {
            self.stable = raw;
            self.fell = !raw;
            self.rose = raw;
        }
    }

    pub fn value(&self) -> bool {
        self.stable
    }

    /// The last update went high to low.
    pub fn fell(&self) -> bool {
        self.fell
    }

    /// The last update went low to high.
    pub fn rose(&self) -> bool {
        self.rose
    }
}

/// Turns debounced edges into clicks: a press followed by a release.
#[derive(Debug)]
pub struct ClickDetector {
    debouncer: Debouncer,
    down: bool,
}

impl ClickDetector {
    pub fn new(now: Instant) -> Self {
        Self {
            debouncer: Debouncer::new(true, now),
            down: false,
        }
    }

    /// Feed one raw sample; true when it completes a press-release pair.
    pub fn update(&mut self, raw: bool, now: Instant) -> bool {
        self.debouncer.update(raw, now);
        if self.debouncer.fell() {
            tracing::debug!("button pushed");
            self.down = true;
        }
        if self.debouncer.rose() {
            tracing::debug!("button released");
            let clicked = self.down;
            self.down = false;
            return clicked;
        }
        false
    }
}

/// Poll `button` forever, running `payload` to completion on every click.
///
/// The run is awaited before the button is polled again, so at most one
/// script runs at a time and presses made during a run are not queued.
pub async fn monitor_button(
    button: &mut impl Button,
    engine: &mut Engine,
    payload: &str,
) -> Result<()> {
    tracing::info!(payload, "monitoring trigger button");
    let mut clicks = ClickDetector::new(Instant::now());
    while button.is_connected() {
        if clicks.update(button.is_high(), Instant::now()) {
            tracing::info!(payload, "button clicked, running payload");
            engine.run(payload).await?;
            tracing::info!(payload, "payload done");
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
    tracing::info!("trigger button disconnected");
    Ok(())
}

/// A button driven by standard input: every line read is one click.
pub struct StdinButton {
    clicks: Receiver<()>,
    pressed_until: Option<Instant>,
    connected: bool,
}

impl StdinButton {
    /// How long each click holds the button down.
    pub const HOLD: Duration = Duration::from_millis(50);

    /// Spawn a background thread that reads stdin line by line.
    pub fn spawn() -> Self {
        let (tx, rx) = channel();
        thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                if line.is_err() || tx.send(()).is_err() {
                    break;
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(clicks: Receiver<()>) -> Self {
        Self {
            clicks,
            pressed_until: None,
            connected: true,
        }
    }
}

impl Button for StdinButton {
    fn is_high(&mut self) -> bool {
        let now = Instant::now();
        if let Some(until) = self.pressed_until {
            if now < until {
                return false;
            }
            // Stay released long enough for the release to debounce.
            if now < until + DEBOUNCE_INTERVAL * 2 {
                return true;
            }
            self.pressed_until = None;
        }
        match self.clicks.try_recv() {
            Ok(()) => {
                self.pressed_until = Some(now + Self::HOLD);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                self.connected = false;
                true
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected || self.pressed_until.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_ignores_glitches() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(true, t0);
        debouncer.update(false, t0 + ms(1));
        debouncer.update(true, t0 + ms(3));
        debouncer.update(true, t0 + ms(20));
        assert!(debouncer.value());
        assert!(!debouncer.fell() && !debouncer.rose());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_reports_edges_once() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(true, t0);
        debouncer.update(false, t0 + ms(1));
        debouncer.update(false, t0 + ms(5));
        assert!(debouncer.value());
        debouncer.update(false, t0 + ms(11));
        assert!(debouncer.fell());
        assert!(!debouncer.value());
        debouncer.update(false, t0 + ms(12));
        assert!(!debouncer.fell());
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_needs_press_then_release() {
        let t0 = Instant::now();
        let mut clicks = ClickDetector::new(t0);
        let samples = [(false, 1), (false, 20), (true, 30), (true, 45)];
        let fired: Vec<_> = samples
            .iter()
            .map(|&(raw, at)| clicks.update(raw, t0 + ms(at)))
            .collect();
        assert_eq!(fired, vec![false, false, false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_without_press_is_ignored() {
        let t0 = Instant::now();
        let mut clicks = ClickDetector {
            debouncer: Debouncer::new(false, t0),
            down: false,
        };
        assert!(!clicks.update(true, t0 + ms(1)));
        assert!(!clicks.update(true, t0 + ms(20)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stdin_button_click_cycle() {
        let (tx, rx) = channel();
        let mut button = StdinButton::from_receiver(rx);
        assert!(button.is_high());
        tx.send(()).unwrap();
        assert!(!button.is_high());
        tokio::time::advance(StdinButton::HOLD).await;
        assert!(button.is_high());
        drop(tx);
        tokio::time::advance(DEBOUNCE_INTERVAL * 2).await;
        assert!(button.is_high());
        assert!(!button.is_connected());
    }
}
