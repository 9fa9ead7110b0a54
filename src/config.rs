use serde::{Deserialize, Serialize};

/// Knobs for a subspace computation. None of them change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubspaceConfig {
    /// Run the range and null passes of the extraction on the rayon pool.
    pub parallel: bool,
    /// Attach wall-clock measurements to the result.
    pub timings: bool,
}

impl Default for SubspaceConfig {
    fn default() -> Self {
        SubspaceConfig {
            parallel: false,
            timings: true,
        }
    }
}

impl SubspaceConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_timings(mut self, timings: bool) -> Self {
        self.timings = timings;
        self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
