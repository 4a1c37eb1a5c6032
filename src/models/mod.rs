pub mod group_spec;
pub mod outcome;
pub mod preset;

pub use group_spec::{Group, GroupSpec, SpecError, TitleLabels};
pub use outcome::{
    GroupOutcome, GroupStatus, MergeError, MergeEvent, MergeReport, MergeSummary, SourceOutcome,
    SourceStatus,
};
pub use preset::{Preset, LEVEL_OUTPUTS};
