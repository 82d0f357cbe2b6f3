//! Fixed-interval playback of a frame sequence.
//!
//! The player does not own a timer. The caller ticks it, either once per
//! interval through `next_frame` or by asking how many frames are due after
//! some elapsed time.

use std::time::Duration;

use crate::Frame;

/// Default interval between two frames.
pub const FRAME_TIME: Duration = Duration::from_millis(230);

/// Bar height, in percent of the chart, for a value.
pub fn bar_height_percent(value: u32) -> u32 {
    value.saturating_mul(10)
}

/// Cursor over one frame sequence.
#[derive(Debug, Clone)]
pub struct Playback {
    frames: Vec<Frame>,
    cursor: usize,
    frame_time: Duration,
}

impl Playback {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            cursor: 0,
            frame_time: FRAME_TIME,
        }
    }

    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames already shown.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    /// Advance one tick. Returns `None` once the sequence is exhausted.
    pub fn next_frame(&mut self) -> Option<&Frame> {
        let frame = self.frames.get(self.cursor)?;
        self.cursor += 1;
        Some(frame)
    }

    /// The frame most recently returned by `next_frame`.
    pub fn current(&self) -> Option<&Frame> {
        self.cursor.checked_sub(1).and_then(|i| self.frames.get(i))
    }

    /// Replace the sequence being played and start over from its first frame.
    ///
    /// The previous sequence is dropped first, so a player never interleaves
    /// two traces.
    pub fn restart(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
        self.cursor = 0;
    }

    /// How many frames a fixed-interval loop would have shown after `elapsed`,
    /// capped at the sequence length.
    pub fn frames_due(&self, elapsed: Duration) -> usize {
        if self.frame_time.is_zero() {
            return self.frames.len();
        }
        let ticks = elapsed.as_nanos() / self.frame_time.as_nanos();
        usize::try_from(ticks).map_or(self.frames.len(), |t| t.min(self.frames.len()))
    }

    /// Advance the cursor to where it should be after `elapsed` and return
    /// the frame now on screen.
    pub fn seek(&mut self, elapsed: Duration) -> Option<&Frame> {
        self.cursor = self.cursor.max(self.frames_due(elapsed));
        self.current()
    }
}

impl Iterator for Playback {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.next_frame().cloned()
    }
}
