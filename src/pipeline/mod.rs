//! The generate pipeline: selection, per-category charts, one deck.

mod controller;
mod naming;
mod report;
mod selection;
mod spec;

pub use controller::{Controller, PipelineState};
pub use naming::{artifact_file_name, artifact_stem};
pub use report::{Artifact, CategoryOutcome, RunOutcome, RunReport};
pub use selection::{CategorySelection, Selection};
pub use spec::{MissingSeriesPolicy, SpecBuilder};
