//! # sortbench — adaptive hybrid sorting benchmarks
//!
//! sortbench times a family of divide-and-conquer sorts (stable merge sort,
//! an insertion-cutoff hybrid, and an introsort-style depth-limited
//! quicksort) against seeded corpora of increasing size, writing one
//! tab-separated row of microsecond timings per size.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortbench::{BenchConfig, BenchRunner, CorpusGenerator, TsvReport};
//!
//! let config = BenchConfig {
//!     min_size: 500,
//!     max_size: 600,
//!     step: 100,
//!     seed: Some(7),
//!     ..BenchConfig::default()
//! };
//!
//! let runner = BenchRunner::new(config).unwrap();
//! let mut generator = CorpusGenerator::from_config(runner.config());
//! let mut report = TsvReport::new(Vec::new());
//! runner.run(&mut generator, &mut report).unwrap();
//!
//! let written = String::from_utf8(report.into_inner().unwrap()).unwrap();
//! assert_eq!(written.lines().count(), 3); // header + one row per size
//! ```

// Public modules
pub mod config;
pub mod corpus;
pub mod error;
pub mod measure;
pub mod montecarlo;
pub mod report;
pub mod rng;
pub mod runner;
pub mod sorts;

// Re-export the main public API
pub use config::{BenchConfig, PerturbationPolicy, SortFamily};
pub use corpus::{CorpusGenerator, CorpusSet};
pub use error::{BenchError, BenchResult};
pub use measure::time_sort;
pub use montecarlo::estimate_circle_area;
pub use report::{ReportSink, TsvReport};
pub use rng::{DefaultRngProvider, RngProvider};
pub use runner::BenchRunner;
pub use sorts::{
    HybridMergeSort, IntroSort, MergeSort, QuickSort, SortAlgorithm, heap_sort,
    hybrid_merge_sort, insertion_sort, intro_sort, merge_sort, quick_sort,
};
