use serde::{Deserialize, Serialize};

/// Configuration for the brute-force optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BFSConfig {
    /// Number of worker threads. If undefined, one thread per logical core is used
    pub n_threads: Option<usize>,
    /// Skip partitions of the search space which cannot allocate as many items as the best assignment found so far
    pub prune: bool,
    /// Maximum number of assignments to enumerate. If undefined, the search is never refused
    pub max_assignments: Option<u128>,
}

impl Default for BFSConfig {
    fn default() -> Self {
        Self {
            n_threads: None,
            prune: true,
            max_assignments: Some(50_000_000),
        }
    }
}
