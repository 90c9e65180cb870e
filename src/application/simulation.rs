use rand::Rng;

use crate::domain::{LifeEngine, LifeError, SeedMode};

/// Simulation orchestrates the engine for the driver loop.
/// It owns the generation index and the pacing accumulator; the engine
/// itself keeps no counters.
pub struct Simulation {
    pub engine: LifeEngine,
    pub is_running: bool,
    pub generation: u64,
    /// Bumped on every change to the current generation, steps and reseeds
    /// alike. Unlike `generation` it never goes back.
    pub revision: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
}

impl Simulation {
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 60.0;

    pub fn new(engine: LifeEngine, updates_per_second: f32) -> Self {
        Self {
            engine,
            is_running: false,
            generation: 0,
            revision: 0,
            update_timer: 0.0,
            updates_per_second,
            last_step_time_ms: 0.0,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second =
            (self.updates_per_second + delta).clamp(Self::MIN_SPEED, Self::MAX_SPEED);
        self
    }

    /// Advance one generation regardless of pacing (manual step while paused)
    pub fn step_once(mut self) -> Self {
        let start = std::time::Instant::now();
        self.engine.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self.revision += 1;
        self
    }

    /// Replace the current generation and restart the generation count
    pub fn reseed<R: Rng>(&mut self, mode: &SeedMode, rng: &mut R) -> Result<(), LifeError> {
        self.engine.reseed(mode, rng)?;
        self.generation = 0;
        self.revision += 1;
        self.update_timer = 0.0;
        Ok(())
    }

    /// Update simulation by one frame.
    /// Steps at most once per frame, when a full update interval has passed.
    /// Time past the interval carries into the next frame, capped at one
    /// interval so a stalled frame cannot queue a burst.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.step_once();
            self.update_timer = (self.update_timer - update_interval).min(update_interval);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dimensions, Grid};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker_sim(ups: f32) -> Simulation {
        let dims = Dimensions::new(6, 6).unwrap();
        let grid = Grid::with_alive(dims, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        Simulation::new(LifeEngine::new(grid).unwrap(), ups)
    }

    #[test]
    fn test_paused_does_not_step() {
        let sim = blinker_sim(10.0).tick(1.0);
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let sim = blinker_sim(10.0).with_running(true);
        let sim = sim.tick(0.05);
        assert_eq!(sim.generation, 0);
        let sim = sim.tick(0.06);
        assert_eq!(sim.generation, 1);
        assert!(sim.update_timer < 0.1);
        assert_eq!(sim.engine.current().get(1, 2), Some(crate::domain::Cell::Alive));
    }

    #[test]
    fn test_one_step_per_frame() {
        let sim = blinker_sim(10.0).with_running(true).tick(5.0);
        assert_eq!(sim.generation, 1);
        assert_eq!(sim.update_timer, 0.1);
    }

    #[test]
    fn test_leftover_time_keeps_the_rate() {
        // 0.375 s frames against a 0.5 s interval: 3 s of frames must give
        // 6 generations, not one every other frame.
        let mut sim = blinker_sim(2.0).with_running(true);
        for _ in 0..8 {
            sim = sim.tick(0.375);
        }
        assert_eq!(sim.generation, 6);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let sim = blinker_sim(10.0).adjust_speed(100.0);
        assert_eq!(sim.updates_per_second, Simulation::MAX_SPEED);
        let sim = sim.adjust_speed(-1000.0);
        assert_eq!(sim.updates_per_second, Simulation::MIN_SPEED);
    }

    #[test]
    fn test_toggle_and_manual_step() {
        let sim = blinker_sim(10.0).toggle_running();
        assert!(sim.is_running);
        let sim = sim.toggle_running().step_once().step_once();
        assert!(!sim.is_running);
        assert_eq!(sim.generation, 2);
        assert_eq!(sim.engine.population(), 3);
    }

    #[test]
    fn test_reseed_resets_generation() {
        let mut sim = blinker_sim(10.0).step_once();
        let mut rng = StdRng::seed_from_u64(5);
        sim.reseed(&SeedMode::Defined, &mut rng).unwrap();
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.revision, 2);
        assert_eq!(sim.engine.population(), 17);
    }
}
