//! The breathing animation on the PWM status LED.

use std::time::Duration;

pub const STEPS: u32 = 100;
pub const STEP_INTERVAL: Duration = Duration::from_millis(10);

const MAX_DUTY: u32 = 65535;

/// A PWM output whose duty cycle spans `0..=65535`.
pub trait PwmLed {
    fn set_duty_cycle(&mut self, duty: u16);
}

/// Duty cycle for one step of the breathing curve: a linear ramp up over the
/// first half of [`STEPS`], then back down.
pub fn breathing_duty(step: u32) -> u16 {
    let step = step % STEPS;
    let half = STEPS / 2;
    let duty = if step < half {
        step * 2 * MAX_DUTY / STEPS
    } else {
        MAX_DUTY - (step - half) * 2 * MAX_DUTY / STEPS
    };
    duty as u16
}

/// Breathe forever, one step every [`STEP_INTERVAL`].
pub async fn breathe(led: &mut impl PwmLed) {
    loop {
        for step in 0..STEPS {
            led.set_duty_cycle(breathing_duty(step));
            tokio::time::sleep(STEP_INTERVAL).await;
        }
        tokio::task::yield_now().await;
    }
}

/// A PWM LED that only reports its duty cycle in the trace log.
#[derive(Debug, Default)]
pub struct TracePwm {
    duty: u16,
}

impl TracePwm {
    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl PwmLed for TracePwm {
    fn set_duty_cycle(&mut self, duty: u16) {
        self.duty = duty;
        tracing::trace!(duty, "pwm led");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_breathing_curve() {
        assert_eq!(breathing_duty(0), 0);
        assert_eq!(breathing_duty(25), 32767);
        assert_eq!(breathing_duty(49), 64224);
        assert_eq!(breathing_duty(50), 65535);
        assert_eq!(breathing_duty(99), 1311);
        assert_eq!(breathing_duty(100), 0);
    }

    #[test]
    fn test_breathing_curve_mirrors() {
        for step in 1..50 {
            let up = breathing_duty(step) as i32;
            let down = breathing_duty(100 - step) as i32;
            assert!((up - down).abs() <= 1, "step {step}: {up} vs {down}");
        }
    }

    struct Shared(Arc<Mutex<Vec<u16>>>);

    impl PwmLed for Shared {
        fn set_duty_cycle(&mut self, duty: u16) {
            self.0.lock().unwrap().push(duty);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_breathe_steps_every_interval() {
        let duties = Arc::new(Mutex::new(Vec::new()));
        let mut led = Shared(duties.clone());
        let _ = tokio::time::timeout(Duration::from_millis(35), breathe(&mut led)).await;
        assert_eq!(*duties.lock().unwrap(), vec![0, 1310, 2621, 3932]);
    }
}
