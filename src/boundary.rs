use std::fmt;

/// Warnings that occur when selecting among a collection of raw tags.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a version
    UnparsableTag { tag: String, reason: String },
    /// Tag is a release candidate and candidates were excluded
    CandidateSkipped { tag: String },
    /// No tag in the input could be used
    NoValidTags,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::CandidateSkipped { tag } => {
                write!(f, "Skipping release candidate '{}'", tag)
            }
            BoundaryWarning::NoValidTags => write!(f, "No valid version tags found"),
        }
    }
}
