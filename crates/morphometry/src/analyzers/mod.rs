//! Per-spot analyzers: each one derives a fixed set of feature values from a
//! spot's boundary and writes them through the feature sink.
//!
//! Contract
//! - An analyzer declares its feature keys up front and writes every one of
//!   them on success — values undefined for the spot's dimensionality are
//!   written as NaN, and missing boundaries degrade to the circle/sphere
//!   fallback. Analyzers themselves therefore rarely error; the `Result`
//!   exists so external computations plugged into the batch layer can
//!   signal per-object failure without disturbing sibling objects.

use thiserror::Error;

use crate::exec::{BatchProcessor, BatchSummary};
use crate::features::FeatureInfo;
use crate::spot::Spot;

pub mod ellipse;
pub mod ellipsoid;
pub mod morphology;
pub mod shape;

pub use ellipse::EllipseAnalyzer;
pub use ellipsoid::EllipsoidAnalyzer;
pub use morphology::MorphologyAnalyzer;
pub use shape::ShapeAnalyzer;

/// Failure of a per-spot computation. Caught and logged at the task
/// boundary; never aborts the batch.
#[derive(Debug, Error)]
#[error("analyzer failure: {0}")]
pub struct AnalyzerError(pub String);

/// One per-spot computation with a declared output feature set.
pub trait SpotAnalyzer: Send + Sync {
    /// Stable identifier for logs and registries.
    fn key(&self) -> &'static str;

    /// The feature keys this analyzer writes, with display metadata.
    fn features(&self) -> &'static [FeatureInfo];

    /// Compute and write this analyzer's features for one spot.
    fn analyze(&self, spot: &mut Spot) -> Result<(), AnalyzerError>;
}

/// Run `analyzer` over every spot on the processor's worker pool, blocking
/// until the whole batch is done.
pub fn run_analyzer(
    processor: &mut BatchProcessor,
    spots: &mut [Spot],
    analyzer: &dyn SpotAnalyzer,
) -> BatchSummary {
    processor.process(spots, |spot| analyzer.analyze(spot))
}
