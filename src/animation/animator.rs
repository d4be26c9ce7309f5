// src/animation/animator.rs
//
// Start/stop guarded tick source. The original ran on a wall-clock interval;
// here the app's update loop feeds in dt and drains whole periods, which
// keeps ticks strictly sequential.

#[derive(Debug)]
pub struct Animator {
    animated: bool,
    timer: f32,
    period: f32,
}

impl Animator {
    pub fn new(period: f32) -> Self {
        Self {
            animated: false,
            timer: 0.0,
            period,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// No-op when already running.
    pub fn start(&mut self) {
        if !self.animated {
            self.animated = true;
            self.timer = 0.0;
        }
    }

    /// No-op when already stopped.
    pub fn stop(&mut self) {
        if self.animated {
            self.animated = false;
            self.timer = 0.0;
        }
    }

    /// Accumulates elapsed time and returns the number of whole periods
    /// that fired. Always 0 while stopped.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.animated {
            return 0;
        }
        self.timer += dt;
        let mut ticks = 0;
        while self.timer >= self.period {
            self.timer -= self.period;
            ticks += 1;
        }
        ticks
    }
}
