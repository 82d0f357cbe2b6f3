use crate::error::ConfigError;
use crate::{Frame, Tracer};

/// Repeated full passes of adjacent swaps until a pass makes none.
///
/// Only swaps produce frames, so sorted input yields an empty trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleTracer;

impl Tracer for BubbleTracer {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn apply(&self, input: &[u32]) -> Vec<Frame> {
        let mut data = input.to_vec();
        let mut frames = Vec::new();
        let mut done = false;

        while !done {
            done = true;
            for i in 1..data.len() {
                if data[i] < data[i - 1] {
                    data.swap(i - 1, i);
                    done = false;
                    frames.push(Frame::new(&data, i - 1, i));
                }
            }
        }

        log::debug!("{}: {} values -> {} frames", self.name(), data.len(), frames.len());
        frames
    }
}

/// Pairwise selection: every later element is compared against position `i`
/// and swapped in immediately when smaller.
///
/// A frame is emitted after every inner step, swap or not. The inner index
/// runs up to and including `len`, so the last frame of each outer pass
/// points one past the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionTracer;

impl Tracer for SelectionTracer {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn apply(&self, input: &[u32]) -> Vec<Frame> {
        let n = input.len();
        if n < 2 {
            return Vec::new();
        }

        let mut data = input.to_vec();
        let mut frames = Vec::with_capacity(n * (n + 1) / 2);

        for i in 0..=n {
            for j in i + 1..=n {
                if j < n && data[j] < data[i] {
                    data.swap(i, j);
                }
                frames.push(Frame::new(&data, i, j));
            }
        }

        log::debug!("{}: {} values -> {} frames", self.name(), n, frames.len());
        frames
    }
}

/// Insertion sort whose outer position advances by `step`.
///
/// Each shift of an element one slot left emits a frame, and every outer
/// iteration ends with a boundary frame highlighting `i` and `i + step`.
/// With `step > 1` only every `step`-th element is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionTracer {
    step: usize,
}

impl InsertionTracer {
    pub fn new(step: usize) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::InvalidStep);
        }
        Ok(Self { step })
    }

    pub fn step(&self) -> usize {
        self.step
    }
}

impl Default for InsertionTracer {
    fn default() -> Self {
        Self { step: 1 }
    }
}

impl Tracer for InsertionTracer {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn apply(&self, input: &[u32]) -> Vec<Frame> {
        let n = input.len();
        if n < 2 {
            return Vec::new();
        }

        let mut data = input.to_vec();
        let mut frames = Vec::new();
        let mut i = 0;

        while i < n {
            let mut j = i;
            while j > 0 && data[j] < data[j - 1] {
                data.swap(j, j - 1);
                frames.push(Frame::new(&data, j, j - 1));
                j -= 1;
            }

            frames.push(Frame::new(&data, i, i + self.step));
            i += self.step;
        }

        log::debug!(
            "{} (step {}): {} values -> {} frames",
            self.name(),
            self.step,
            n,
            frames.len()
        );
        frames
    }
}
