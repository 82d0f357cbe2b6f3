//! Top-down merge sort tracer.
//!
//! Every merge step is snapshotted against a full-length working buffer, so
//! frames always show the whole array rather than the slice being merged.

use crate::{Frame, Tracer};

/// Half-open range `[low, high)` of the original array covered by one
/// recursive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub low: usize,
    pub high: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.high - self.low
    }

    /// Absolute position where the right half starts; the left half gets
    /// `floor(len / 2)` elements.
    pub fn mid(&self) -> usize {
        self.low + self.len() / 2
    }

    pub fn split(&self) -> (Span, Span) {
        let mid = self.mid();
        (
            Span { low: self.low, high: mid },
            Span { low: mid, high: self.high },
        )
    }
}

/// Merge sort by recursive halving, finishing with an `(0, 0)` frame holding
/// the sorted array.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeTracer;

impl Tracer for MergeTracer {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn apply(&self, input: &[u32]) -> Vec<Frame> {
        if input.is_empty() {
            return Vec::new();
        }

        let mut work = input.to_vec();
        let mut frames = Vec::new();
        let whole = Span { low: 0, high: input.len() };
        let sorted = sort(whole, input.to_vec(), &mut work, &mut frames);
        frames.push(Frame::new(&sorted, 0, 0));

        log::debug!("{}: {} values -> {} frames", self.name(), input.len(), frames.len());
        frames
    }
}

fn sort(span: Span, values: Vec<u32>, work: &mut [u32], frames: &mut Vec<Frame>) -> Vec<u32> {
    if values.len() <= 1 {
        return values;
    }

    let (left_span, right_span) = span.split();
    let mut left = values;
    let right = left.split_off(left_span.len());

    let left = sort(left_span, left, work, frames);
    let right = sort(right_span, right, work, frames);
    merge(span, &left, &right, work, frames)
}

/// Merge two sorted halves of `span`.
///
/// Frames drawn from the right half highlight `low + i` and `low + ri`; frames
/// drawn from the left half are offset by `mid` instead of `low`. Either pair
/// may fall outside the array.
fn merge(
    span: Span,
    left: &[u32],
    right: &[u32],
    work: &mut [u32],
    frames: &mut Vec<Frame>,
) -> Vec<u32> {
    log::trace!("merge [{}, {}) at mid {}", span.low, span.high, span.mid());

    let total = left.len() + right.len();
    let mid = span.mid();
    let mut result = Vec::with_capacity(total);
    let mut li = 0;
    let mut ri = 0;

    for i in 0..total {
        // An exhausted side never wins, so the other drains.
        let take_right = match (left.get(li), right.get(ri)) {
            (Some(l), Some(r)) => r < l,
            (None, Some(_)) => true,
            _ => false,
        };

        if take_right {
            result.push(right[ri]);
            commit(work, span.low, &result);
            frames.push(Frame::new(work, span.low + i, span.low + ri));
            ri += 1;
        } else {
            result.push(left[li]);
            commit(work, span.low, &result);
            frames.push(Frame::new(work, mid + i, mid + li));
            li += 1;
        }
    }

    result
}

/// Copy the placed prefix of a merge result into the working buffer.
fn commit(work: &mut [u32], low: usize, placed: &[u32]) {
    work[low..low + placed.len()].copy_from_slice(placed);
}
