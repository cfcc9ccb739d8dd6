/// Whether `t_step` is a positive multiple of the schedule's one-decimal
/// rounding precision
pub fn step_on_decimal_grid(t_step: f64) -> bool {
    let scaled = t_step * 10.0;
    scaled.round() >= 1.0 && (scaled - scaled.round()).abs() < 1e-9
}

/// Direction of the temperature ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Heating,
    Cooling,
}

/// Triangular annealing schedule
///
/// Temperature ramps linearly from `t_start` up to
/// `t_final = t_start + t_delta`, then back down. The Heating -> Cooling
/// transition is one-way and fires on the step after the temperature first
/// reaches `t_final`; the run is finished once the temperature drops below
/// `t_start` while cooling.
#[derive(Debug, Clone)]
pub struct AnnealingScheduler {
    temperature: f64,
    t_start: f64,
    t_final: f64,
    t_step: f64,
    phase: Phase,
}

impl AnnealingScheduler {
    pub fn new(t_start: f64, t_delta: f64, t_step: f64) -> Self {
        assert!(t_start > 0.0, "t_start must be positive");
        assert!(t_delta > 0.0, "t_delta must be positive");
        // A step off the one-decimal grid would be swallowed by the
        // post-step rounding and stall the ramp.
        assert!(
            step_on_decimal_grid(t_step),
            "t_step must be a positive multiple of 0.1"
        );
        Self {
            temperature: t_start,
            t_start,
            t_final: t_start + t_delta,
            t_step,
            phase: Phase::Heating,
        }
    }

    /// Temperature for the current sweep
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once one full heat-then-cool triangle has completed
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Cooling && self.temperature < self.t_start
    }

    /// Move the temperature by one step
    ///
    /// The phase transition is checked before the delta is applied, so the
    /// sweep at `t_final` itself runs in the Heating phase and the very next
    /// step already cools. Rounding to one decimal keeps fractional-step
    /// ramps free of floating drift.
    pub fn advance(&mut self) {
        if self.phase == Phase::Heating && self.temperature >= self.t_final {
            self.phase = Phase::Cooling;
        }
        match self.phase {
            Phase::Heating => self.temperature += self.t_step,
            Phase::Cooling => self.temperature -= self.t_step,
        }
        self.temperature = (self.temperature * 10.0).round() / 10.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_schedule() {
        let (t_start, t_delta, t_step) = (173.0, 1000.0, 1.0);
        let t_final = t_start + t_delta;
        let mut scheduler = AnnealingScheduler::new(t_start, t_delta, t_step);

        let mut temps = Vec::new();
        let mut cooled = false;
        while !scheduler.is_finished() {
            temps.push(scheduler.temperature());
            if scheduler.phase() == Phase::Cooling {
                cooled = true;
            } else {
                // The phase transition is one-way
                assert!(!cooled);
            }
            scheduler.advance();
        }

        // t_final is visited exactly once, at the heating/cooling apex
        let apex_visits = temps.iter().filter(|&&t| t == t_final).count();
        assert_eq!(apex_visits, 1);
        assert_eq!(temps.first().copied(), Some(t_start));
        assert_eq!(temps.last().copied(), Some(t_start));

        // Both ramps sweep every temperature inclusive of the endpoints:
        // 1001 heating + 1000 cooling
        assert_eq!(temps.len(), 2 * (t_delta / t_step) as usize + 1);
        assert!(scheduler.temperature() < t_start);
        assert_eq!(scheduler.phase(), Phase::Cooling);
    }

    #[test]
    fn test_apex_sweep_runs_in_heating_phase() {
        let mut scheduler = AnnealingScheduler::new(1.0, 3.0, 1.0);
        while scheduler.temperature() < 4.0 {
            scheduler.advance();
        }
        // The check fires before the delta, so the apex itself still heats
        assert_eq!(scheduler.phase(), Phase::Heating);
        scheduler.advance();
        assert_eq!(scheduler.phase(), Phase::Cooling);
        assert_relative_eq!(scheduler.temperature(), 3.0);
    }

    #[test]
    fn test_fractional_steps_stay_on_one_decimal() {
        let mut scheduler = AnnealingScheduler::new(1.0, 1.0, 0.1);
        let mut expected = 1.0_f64;
        for _ in 0..10 {
            scheduler.advance();
            expected += 0.1;
            expected = (expected * 10.0).round() / 10.0;
            assert_relative_eq!(scheduler.temperature(), expected);
            // Exactly representable after rounding to one decimal
            assert_relative_eq!(
                scheduler.temperature() * 10.0,
                (scheduler.temperature() * 10.0).round()
            );
        }
    }

    #[test]
    #[should_panic]
    fn test_non_positive_start_panics() {
        let _ = AnnealingScheduler::new(0.0, 10.0, 1.0);
    }

    #[test]
    #[should_panic]
    fn test_step_below_rounding_precision_panics() {
        // 0.01 would be rounded away every step and the ramp would stall
        let _ = AnnealingScheduler::new(173.0, 1000.0, 0.01);
    }

    #[test]
    #[should_panic]
    fn test_step_off_decimal_grid_panics() {
        // 0.05 survives heating but cancels against rounding while cooling
        let _ = AnnealingScheduler::new(173.0, 1000.0, 0.05);
    }

    #[test]
    fn test_step_grid_check() {
        assert!(step_on_decimal_grid(0.1));
        assert!(step_on_decimal_grid(1.0));
        assert!(step_on_decimal_grid(2.5));
        assert!(!step_on_decimal_grid(0.01));
        assert!(!step_on_decimal_grid(0.05));
        assert!(!step_on_decimal_grid(0.0));
        assert!(!step_on_decimal_grid(-1.0));
    }

    #[test]
    fn test_every_advance_moves_the_temperature() {
        let mut scheduler = AnnealingScheduler::new(1.0, 2.0, 0.1);
        let mut previous = scheduler.temperature();
        while !scheduler.is_finished() {
            scheduler.advance();
            assert_ne!(scheduler.temperature(), previous);
            previous = scheduler.temperature();
        }
    }

    #[test]
    fn test_not_finished_while_heating() {
        let scheduler = AnnealingScheduler::new(5.0, 10.0, 1.0);
        assert!(!scheduler.is_finished());
        assert_eq!(scheduler.phase(), Phase::Heating);
    }
}
