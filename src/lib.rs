//! Sort Tracer
//!
//! Classic comparison sorts instrumented to emit a replayable trace of
//! frames: the full array after each step plus the two positions involved.
//! A renderer replays the frames on a fixed interval to animate the sort.

pub mod algorithm;
pub mod data;
pub mod error;
pub mod frame;
pub mod merge;
pub mod playback;
pub mod tracers;

pub use algorithm::Algorithm;
pub use data::{random_data, DataConfig};
pub use error::ConfigError;
pub use frame::Frame;
pub use merge::MergeTracer;
pub use playback::{bar_height_percent, Playback, FRAME_TIME};
pub use tracers::{BubbleTracer, InsertionTracer, SelectionTracer};

/// Trait for sorting algorithms that record their execution as frames
pub trait Tracer {
    /// Short lowercase identifier, e.g. `"bubble"`.
    fn name(&self) -> &'static str;

    /// Sort a copy of `input`, returning every animation step in order.
    ///
    /// The caller's slice is never modified and the returned frames share no
    /// storage with it or with each other.
    fn apply(&self, input: &[u32]) -> Vec<Frame>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn is_sorted(data: &[u32]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    fn check_trace<T: Tracer>(tracer: &T, input: &[u32]) {
        let before = input.to_vec();
        let frames = tracer.apply(input);
        assert_eq!(input, &before[..], "{} mutated its input", tracer.name());

        for frame in &frames {
            assert_eq!(frame.len(), input.len(), "{}: frame length drifted", tracer.name());
        }

        if input.len() >= 2 {
            // Only already-sorted input may come back without frames (bubble).
            let result = match frames.last() {
                Some(last) => &last.data[..],
                None => {
                    assert!(is_sorted(input), "{}: no frames for {:?}", tracer.name(), input);
                    input
                }
            };
            assert!(is_sorted(result), "{}: {:?} -> {:?}", tracer.name(), input, result);

            let mut expected = input.to_vec();
            expected.sort_unstable();
            assert_eq!(result, &expected[..]);
        }
    }

    /// Shared checks every tracer must pass.
    pub(crate) fn check_tracer<T: Tracer>(tracer: &T) {
        // Empty
        assert!(tracer.apply(&[]).is_empty());

        // Single element
        let frames = tracer.apply(&[42]);
        assert!(frames.len() <= 1);
        check_trace(tracer, &[42]);

        // Two elements
        check_trace(tracer, &[5, 3]);

        // Already sorted
        let sorted: Vec<u32> = (1..=20).collect();
        check_trace(tracer, &sorted);

        // Reverse sorted
        let reverse: Vec<u32> = (1..=20).rev().collect();
        check_trace(tracer, &reverse);

        // Duplicates
        check_trace(tracer, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
        check_trace(tracer, &[7; 9]);

        // Random, in the generator's usual range
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        for len in [3, 16, 17, 64] {
            let random: Vec<u32> = (0..len).map(|_| rng.gen_range(1..10)).collect();
            check_trace(tracer, &random);
        }
    }

    #[test]
    fn frames_are_independent() {
        let tracers: Vec<Box<dyn Tracer>> = vec![
            Box::new(BubbleTracer),
            Box::new(SelectionTracer),
            Box::new(InsertionTracer::default()),
            Box::new(MergeTracer),
        ];

        for tracer in &tracers {
            let mut frames = tracer.apply(&[4, 2, 3, 1]);
            let untouched = frames.clone();
            for value in frames[0].data.iter_mut() {
                *value = 0;
            }
            assert_eq!(frames[1..], untouched[1..], "{}", tracer.name());
        }
    }
}
