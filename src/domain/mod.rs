//! Domain logic - pure version rules independent of where tags come from

pub mod tag;
pub mod version;

pub use tag::{select_latest, sort_versions, strip_leading_marker, Tag, TagSelection};
pub use version::{
    compare_operands, is_greater_or_equal_tag, matches_grammar, Version, VersionBump,
};
