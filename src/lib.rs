//! Release tag versions: parsing, ordering and incrementing.
//!
//! Tags follow the grammar `v<major>.<minor>.<patch>` with an optional
//! `-rc<n>` release candidate suffix. A final release orders above every
//! release candidate of the same `major.minor.patch`.
//!
//! Incrementing treats anything before 1.0 as unstable: a breaking change
//! bumps minor and a new feature bumps patch while major is 0. This differs
//! from standard semver; see [`Version::increment`].

pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{
    compare_operands, is_greater_or_equal_tag, matches_grammar, strip_leading_marker, Version,
    VersionBump,
};
pub use error::{Result, Side, VtagError};
