//! Bounded-concurrency batch execution over independent objects.
//!
//! Purpose
//! - Apply one per-object computation to every object of a collection on a
//!   fixed-size worker pool, with per-object failure isolation and a full
//!   join before returning.
//!
//! Model
//! - One task per object; no ordering between objects and no cross-object
//!   state, so results are identical for any pool size.
//! - A task's `Err` is caught at the task boundary, logged and counted; the
//!   failing object simply keeps whatever it had, and every sibling task
//!   runs to completion.
//! - The pool is built for each call and shut down when the call returns; it
//!   is never shared or reused. There is no cancellation and no timeout: a
//!   hung computation stalls the whole batch (accepted limitation).

use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Outcome of one batch run.
#[derive(Clone, Copy, Debug)]
pub struct BatchSummary {
    /// Number of objects submitted.
    pub total: usize,
    /// Number of objects whose computation returned an error.
    pub failed: usize,
    /// Wall-clock time of the whole batch.
    pub duration: Duration,
}

/// Default pool size: half the available hardware threads, at least one.
pub fn default_pool_size() -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2);
    (cores / 2).max(1)
}

/// Fixed-size worker-pool runner for per-object computations.
#[derive(Debug)]
pub struct BatchProcessor {
    num_threads: usize,
    last_duration: Option<Duration>,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self {
            num_threads: default_pool_size(),
            last_duration: None,
        }
    }

    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: num_threads.max(1),
            last_duration: None,
        }
    }

    /// Override the pool size for subsequent runs.
    pub fn set_num_threads(&mut self, num_threads: usize) {
        self.num_threads = num_threads.max(1);
    }

    #[inline]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Wall-clock duration of the most recent batch, if any ran.
    #[inline]
    pub fn last_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    /// Run `op` once per item and block until every task has finished,
    /// successfully or not.
    pub fn process<T, E, F>(&mut self, items: &mut [T], op: F) -> BatchSummary
    where
        T: Send,
        E: Display,
        F: Fn(&mut T) -> Result<(), E> + Sync,
    {
        let start = Instant::now();
        let total = items.len();
        let failed = AtomicUsize::new(0);

        let task = |index: usize, item: &mut T| {
            if let Err(err) = op(item) {
                failed.fetch_add(1, Ordering::Relaxed);
                log::warn!("object {index}: computation failed: {err}");
            }
        };

        match ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()
        {
            Ok(pool) => pool.install(|| {
                items
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(index, item)| task(index, item));
            }),
            Err(err) => {
                // Keep the totality guarantee even without a pool.
                log::warn!("worker pool unavailable ({err}); running sequentially");
                for (index, item) in items.iter_mut().enumerate() {
                    task(index, item);
                }
            }
        }

        let duration = start.elapsed();
        self.last_duration = Some(duration);
        BatchSummary {
            total,
            failed: failed.load(Ordering::Relaxed),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::analyzers::{run_analyzer, AnalyzerError, ShapeAnalyzer, SpotAnalyzer};
    use crate::features::{self, FeatureInfo};
    use crate::geom2::rand::{draw_blob, BlobCfg, ReplayToken};
    use crate::spot::Spot;

    #[derive(Debug)]
    struct Item {
        id: usize,
        value: Option<f64>,
    }

    fn items(n: usize) -> Vec<Item> {
        (0..n).map(|id| Item { id, value: None }).collect()
    }

    #[test]
    fn all_items_are_processed() {
        let mut processor = BatchProcessor::with_threads(4);
        let mut batch = items(100);
        let summary = processor.process(&mut batch, |item| -> Result<(), AnalyzerError> {
            item.value = Some(item.id as f64 * 2.0);
            Ok(())
        });
        assert_eq!(summary.total, 100);
        assert_eq!(summary.failed, 0);
        for item in &batch {
            assert_eq!(item.value, Some(item.id as f64 * 2.0));
        }
    }

    #[test]
    fn one_failure_does_not_disturb_siblings() {
        let mut processor = BatchProcessor::with_threads(4);
        let mut batch = items(50);
        let summary = processor.process(&mut batch, |item| {
            if item.id == 17 {
                return Err(AnalyzerError("synthetic failure".into()));
            }
            item.value = Some(1.0);
            Ok(())
        });
        assert_eq!(summary.total, 50);
        assert_eq!(summary.failed, 1);
        for item in &batch {
            if item.id == 17 {
                assert_eq!(item.value, None);
            } else {
                assert_eq!(item.value, Some(1.0));
            }
        }
    }

    #[test]
    fn results_are_identical_for_any_pool_size() {
        let make_spots = || -> Vec<Spot> {
            (0..40)
                .map(|i| {
                    let blob = draw_blob(
                        BlobCfg {
                            vertices: 20,
                            radial_jitter: 0.3,
                            base_radius: 1.0 + i as f64 * 0.05,
                        },
                        ReplayToken {
                            seed: 11,
                            index: i as u64,
                        },
                    );
                    Spot::planar(i as f64, 0.0, 1.0, 1.0).with_polygon(blob)
                })
                .collect()
        };

        let mut serial = make_spots();
        let mut wide = make_spots();
        BatchProcessor::with_threads(1).process(&mut serial, |s| ShapeAnalyzer.analyze(s));
        BatchProcessor::with_threads(8).process(&mut wide, |s| ShapeAnalyzer.analyze(s));

        for (a, b) in serial.iter().zip(wide.iter()) {
            assert_eq!(a.features().len(), b.features().len());
            for (key, va) in a.features() {
                let vb = b.feature(key).unwrap();
                assert!(
                    va.to_bits() == vb.to_bits(),
                    "{key}: {va} != {vb} across pool sizes"
                );
            }
        }
    }

    #[test]
    fn duration_is_recorded_and_retrievable() {
        let mut processor = BatchProcessor::with_threads(2);
        assert!(processor.last_duration().is_none());
        let mut batch = items(8);
        let summary = processor.process(&mut batch, |_| -> Result<(), AnalyzerError> { Ok(()) });
        assert_eq!(processor.last_duration(), Some(summary.duration));
    }

    #[test]
    fn empty_batches_are_a_no_op() {
        let mut processor = BatchProcessor::new();
        let mut batch: Vec<Item> = Vec::new();
        let summary = processor.process(&mut batch, |_| -> Result<(), AnalyzerError> { Ok(()) });
        assert_eq!(summary.total, 0);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn failing_analyzer_leaves_other_spots_fully_updated() {
        struct FailOnNegativeRadius;
        impl SpotAnalyzer for FailOnNegativeRadius {
            fn key(&self) -> &'static str {
                "FAIL_ON_NEGATIVE"
            }
            fn features(&self) -> &'static [FeatureInfo] {
                features::SHAPE_FEATURES
            }
            fn analyze(&self, spot: &mut Spot) -> Result<(), AnalyzerError> {
                if spot.radius < 0.0 {
                    return Err(AnalyzerError("negative radius".into()));
                }
                ShapeAnalyzer.analyze(spot)
            }
        }

        let mut spots: Vec<Spot> = (0..10)
            .map(|i| {
                let r = if i == 4 { -1.0 } else { 1.0 + i as f64 };
                Spot::planar(i as f64, 0.0, r, 1.0)
            })
            .collect();
        let mut processor = BatchProcessor::with_threads(3);
        let summary = run_analyzer(&mut processor, &mut spots, &FailOnNegativeRadius);

        assert_eq!(summary.failed, 1);
        for (i, spot) in spots.iter().enumerate() {
            if i == 4 {
                assert!(spot.feature(features::AREA).is_none());
            } else {
                assert!(spot.feature(features::AREA).is_some());
            }
        }
    }

    #[test]
    fn default_pool_size_is_at_least_one() {
        assert!(default_pool_size() >= 1);
        let spot_count = BatchProcessor::new().num_threads();
        assert!(spot_count >= 1);
    }
}
