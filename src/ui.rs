//! Formatting and printing helpers for command-line output.
//!
//! `format_*` functions are pure and return strings; `display_*` functions print.

use crate::boundary::BoundaryWarning;
use crate::domain::{Version, VersionBump};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
///
/// Goes to stderr so stdout stays pipeable.
pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Render a version either as a tag or, when `plain`, without the leading `v`.
pub fn format_version(version: &Version, plain: bool) -> String {
    if plain {
        version.to_string()
    } else {
        version.to_tag()
    }
}

/// Render the components of a version, one `key: value` pair per line.
pub fn format_version_details(version: &Version) -> String {
    let release_candidate = match version.release_candidate {
        Some(rc) => rc.to_string(),
        None => "none".to_string(),
    };
    format!(
        "major: {}\nminor: {}\npatch: {}\nrelease_candidate: {}",
        version.major, version.minor, version.patch, release_candidate
    )
}

/// Label describing which component a bump touched, e.g. "(minor bump)".
pub fn format_bump_label(bump: &VersionBump) -> String {
    format!("({} bump)", bump)
}

/// Display the proposed version change (or initial version).
///
/// # Arguments
/// * `old` - Previous tag and the bump applied to it (None if there was none)
/// * `new` - The next tag
pub fn display_proposed_tag(old: Option<(&str, VersionBump)>, new: &str) {
    match old {
        Some((old, bump)) => {
            eprintln!("\x1b[1mNext version:\x1b[0m");
            eprintln!("  From: \x1b[31m{}\x1b[0m", old);
            eprintln!("  To:   \x1b[32m{}\x1b[0m {}", new, format_bump_label(&bump));
        }
        None => {
            eprintln!("\x1b[1mInitial version:\x1b[0m");
            eprintln!("  New tag: \x1b[32m{}\x1b[0m", new);
        }
    }
}
