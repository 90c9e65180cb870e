/// Tracks the average frame rate since start-up and a caption that is
/// refreshed a few times per second rather than every frame.
pub struct FrameRate {
    frames: u64,
    elapsed: f32,
    since_refresh: f32,
    caption: String,
}

impl FrameRate {
    pub const REFRESH_INTERVAL: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            frames: 0,
            elapsed: 0.0,
            since_refresh: 0.0,
            caption: "Game Of Life".to_owned(),
        }
    }

    /// Count one rendered frame lasting `delta_time` seconds.
    /// Returns true when the caption was rebuilt.
    pub fn record_frame(&mut self, delta_time: f32) -> bool {
        self.frames += 1;
        self.elapsed += delta_time;
        self.since_refresh += delta_time;

        if self.since_refresh <= Self::REFRESH_INTERVAL {
            return false;
        }
        self.caption = caption(self.fps());
        self.since_refresh = 0.0;
        true
    }

    /// Frames per second averaged over the whole run
    pub fn fps(&self) -> f32 {
        if self.elapsed > 0.0 {
            self.frames as f32 / self.elapsed
        } else {
            0.0
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::new()
    }
}

pub fn caption(fps: f32) -> String {
    format!("Game of Life Running @ [fps]: {:.1}", fps)
}
