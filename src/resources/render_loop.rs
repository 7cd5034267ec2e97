use bevy::prelude::*;

/// Frame loop bookkeeping: pause flag, frame counter and the stop request.
#[derive(Resource, Debug, Clone, Default)]
pub struct RenderLoop {
    paused: bool,
    landed: bool,
    running: bool,
    frames: u64,
}

impl RenderLoop {
    pub fn start(&mut self) {
        if !self.running {
            info!("Render loop started");
        }
        self.running = true;
    }

    /// Ends the loop for good. Teardown runs on the next state transition.
    pub fn stop(&mut self) {
        if self.running {
            info!("Render loop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    /// Flip the pause flag. A landed flight stays paused.
    pub fn toggle_pause(&mut self) -> bool {
        if self.landed {
            return self.paused;
        }
        self.paused = !self.paused;
        info!("{}", if self.paused { "Paused" } else { "Resumed" });
        self.paused
    }

    pub fn pause_for_landing(&mut self) {
        if !self.landed {
            info!("Landed, pausing");
        }
        self.landed = true;
        self.paused = true;
    }

    pub fn is_active(&self) -> bool {
        self.running && !self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_landed(&self) -> bool {
        self.landed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn count_frame(&mut self) {
        self.frames += 1;
    }
}
