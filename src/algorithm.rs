use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::{BubbleTracer, Frame, InsertionTracer, MergeTracer, SelectionTracer, Tracer};

/// The closed set of tracers a player can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion(InsertionTracer),
    Merge,
}

impl Algorithm {
    /// Every algorithm in menu order, with default configuration.
    pub fn all() -> [Algorithm; 4] {
        [
            Algorithm::Bubble,
            Algorithm::Selection,
            Algorithm::Insertion(InsertionTracer::default()),
            Algorithm::Merge,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion(_) => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    fn tracer(&self) -> &dyn Tracer {
        match self {
            Algorithm::Bubble => &BubbleTracer,
            Algorithm::Selection => &SelectionTracer,
            Algorithm::Insertion(tracer) => tracer,
            Algorithm::Merge => &MergeTracer,
        }
    }
}

impl Tracer for Algorithm {
    fn name(&self) -> &'static str {
        self.tracer().name()
    }

    fn apply(&self, input: &[u32]) -> Vec<Frame> {
        self.tracer().apply(input)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Algorithm::all()
            .into_iter()
            .find(|algorithm| algorithm.name() == key)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}
