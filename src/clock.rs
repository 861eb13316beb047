use crate::foundation::core::{AnimTime, FrameIndex, Fps};

/// Something that can report the current animation time.
pub trait AnimClock {
    /// Current reading.
    fn now(&self) -> AnimTime;
}

impl AnimClock for AnimTime {
    fn now(&self) -> AnimTime {
        *self
    }
}

/// Clock stepped in whole frames at a fixed rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    fps: Fps,
    frame: FrameIndex,
}

impl FrameClock {
    /// Clock at frame 0.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            frame: FrameIndex(0),
        }
    }

    /// Current frame.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Jump to `frame`.
    pub fn seek(&mut self, frame: FrameIndex) {
        self.frame = frame;
    }

    /// Step forward one frame and return the new time.
    pub fn advance(&mut self) -> AnimTime {
        self.frame = FrameIndex(self.frame.0.saturating_add(1));
        self.now()
    }
}

impl AnimClock for FrameClock {
    fn now(&self) -> AnimTime {
        self.fps.frame_time(self.frame)
    }
}
