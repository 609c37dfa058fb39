use crate::boundary::BoundaryWarning;
use crate::domain::version::Version;
use crate::error::Result;

/// Leading marker carried by every release tag
pub const TAG_MARKER: char = 'v';

/// Remove one leading `v` from a tag (e.g., "v1.2.3" -> "1.2.3").
///
/// Display helper only: the remainder is never validated.
pub fn strip_leading_marker(tag: &str) -> &str {
    tag.strip_prefix(TAG_MARKER).unwrap_or(tag)
}

/// Represents a raw release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Version number without the leading marker
    pub fn version_part(&self) -> &str {
        strip_leading_marker(&self.name)
    }

    /// Parse the tag into a version
    pub fn version(&self) -> Result<Version> {
        Version::parse(&self.name)
    }
}

/// Outcome of picking the latest tag out of a collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagSelection {
    /// Greatest usable tag and its version, if any
    pub latest: Option<(Tag, Version)>,
    /// Tags that were skipped, in input order
    pub warnings: Vec<BoundaryWarning>,
}

/// Pick the greatest tag out of `tags`.
///
/// Tags that fail to parse are reported, never treated as a default version.
/// When `include_candidates` is false, release candidates are skipped and
/// reported too. Ties keep the first occurrence.
pub fn select_latest<I, S>(tags: I, include_candidates: bool) -> TagSelection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selection = TagSelection::default();

    for raw in tags {
        let tag = Tag::new(raw.as_ref().trim());
        if tag.name.is_empty() {
            continue;
        }

        let version = match tag.version() {
            Ok(version) => version,
            Err(e) => {
                selection.warnings.push(BoundaryWarning::UnparsableTag {
                    tag: tag.name,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !include_candidates && !version.is_final() {
            selection
                .warnings
                .push(BoundaryWarning::CandidateSkipped { tag: tag.name });
            continue;
        }

        let is_newer = match &selection.latest {
            Some((_, current)) => version > *current,
            None => true,
        };
        if is_newer {
            selection.latest = Some((tag, version));
        }
    }

    if selection.latest.is_none() {
        selection.warnings.push(BoundaryWarning::NoValidTags);
    }

    tracing::debug!(
        latest = ?selection.latest.as_ref().map(|(tag, _)| tag.name.as_str()),
        skipped = selection.warnings.len(),
        "selected latest tag"
    );

    selection
}

/// Parse every valid tag and return them in ascending version order.
///
/// Unparseable tags are dropped.
pub fn sort_versions<I, S>(tags: I) -> Vec<(Tag, Version)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed: Vec<(Tag, Version)> = tags
        .into_iter()
        .filter_map(|raw| {
            let tag = Tag::new(raw.as_ref().trim());
            tag.version().ok().map(|version| (tag, version))
        })
        .collect();
    parsed.sort_by(|a, b| a.1.cmp(&b.1));
    parsed
}
