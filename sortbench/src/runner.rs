//! Sweep orchestration: corpora in, timing rows out.

use rand::RngCore;

use crate::config::{BenchConfig, SortFamily};
use crate::corpus::CorpusGenerator;
use crate::error::BenchResult;
use crate::measure::time_sort;
use crate::report::ReportSink;
use crate::sorts::{HybridMergeSort, IntroSort, MergeSort, QuickSort, SortAlgorithm};

/// Orchestrates one benchmark sweep.
///
/// For every size in the configured range the runner requests one corpus
/// set, times the family's baseline and hybrid against each of the three
/// variants (always on a fresh private copy), and emits one report row.
/// Sizes and cells are sequenced strictly in order; nothing runs
/// concurrently with a timed call.
#[derive(Debug)]
pub struct BenchRunner {
    config: BenchConfig,
}

impl BenchRunner {
    /// Create a runner after validating `config`.
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this runner sweeps with
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the sweep, writing the header and one row per size into `sink`.
    ///
    /// Any generation, sorting, or report error aborts the run immediately
    /// with the failing size and algorithm named in the diagnostic.
    pub fn run<R, S>(&self, generator: &mut CorpusGenerator<R>, sink: &mut S) -> BenchResult<()>
    where
        R: RngCore,
        S: ReportSink,
    {
        sink.write_header(&self.config.family.column_labels())?;

        let (baseline, hybrid) = self.algorithms();
        let mut size = self.config.min_size;
        while size <= self.config.max_size {
            let corpora = generator
                .generate(size, self.config.value_min, self.config.value_max)
                .map_err(|e| e.with_context(format!("generating corpora of size {}", size)))?;

            let mut timings = Vec::with_capacity(6);
            for algorithm in [baseline.as_ref(), hybrid.as_ref()] {
                for variant in [&corpora.random, &corpora.reversed, &corpora.almost_sorted] {
                    let elapsed = time_sort(algorithm, variant).map_err(|e| {
                        e.with_context(format!("size {}, algorithm {}", size, algorithm.name()))
                    })?;
                    timings.push(elapsed);
                }
            }

            sink.write_row(size, &timings)?;
            size = match size.checked_add(self.config.step) {
                Some(next) => next,
                None => break,
            };
        }

        Ok(())
    }

    /// The baseline/hybrid pair for the configured family.
    fn algorithms(&self) -> (Box<dyn SortAlgorithm<i32>>, Box<dyn SortAlgorithm<i32>>) {
        match self.config.family {
            SortFamily::Merge => (
                Box::new(MergeSort),
                Box::new(HybridMergeSort {
                    threshold: self.config.insertion_threshold,
                }),
            ),
            SortFamily::Quick => (Box::new(QuickSort), Box::new(IntroSort)),
        }
    }
}
