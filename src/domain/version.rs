use crate::error::{Result, Side, VtagError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Accepted tag shape: `v<major>.<minor>.<patch>` with an optional `-rc<n>` suffix
// ASCII digits only; `\d` is Unicode-aware in the regex crate.
const TAG_GRAMMAR: &str = r"^v([0-9]+)\.([0-9]+)\.([0-9]+)(?:-rc([0-9]+))?$";

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(TAG_GRAMMAR).expect("tag grammar is a valid regex"))
}

/// Returns whether `tag` matches the accepted tag grammar.
///
/// The grammar is exact and case-sensitive: `v1.2.3` and `v1.2.3-rc4` match,
/// while `1.2.3`, `v1.2`, `v1.2.3-rc`, `v1.2.3-release1` and `v1.2.3+rc1` do not.
/// Numeric range is not checked here, so a huge component may still fail to parse.
pub fn matches_grammar(tag: &str) -> bool {
    tag_regex().is_match(tag)
}

/// Version parsed from a release tag.
///
/// `release_candidate` is `None` for a final release. Within a family of equal
/// `(major, minor, patch)`, the final release orders above every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub release_candidate: Option<u64>,
}

impl Version {
    /// Create a final release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            release_candidate: None,
        }
    }

    /// Create a release candidate version
    pub fn candidate(major: u64, minor: u64, patch: u64, rc: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            release_candidate: Some(rc),
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3-rc1").
    ///
    /// The leading `v` is part of the grammar and is required. Any mismatch,
    /// including a component that overflows `u64`, yields
    /// [`VtagError::InvalidFormat`] carrying the original input.
    pub fn parse(tag: &str) -> Result<Self> {
        let captures = tag_regex().captures(tag).ok_or_else(|| {
            tracing::debug!(tag, "tag does not match grammar");
            VtagError::invalid_format(tag)
        })?;

        let number = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|e| {
                tracing::debug!(tag, error = %e, "version component out of range");
                VtagError::invalid_format(tag)
            })
        };

        let release_candidate = match captures.get(4) {
            Some(rc) => Some(rc.as_str().parse::<u64>().map_err(|e| {
                tracing::debug!(tag, error = %e, "release candidate out of range");
                VtagError::invalid_format(tag)
            })?),
            None => None,
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            release_candidate,
        })
    }

    /// Whether this is a final release (no release candidate)
    pub fn is_final(&self) -> bool {
        self.release_candidate.is_none()
    }

    /// Whether `self >= other` under the release-candidate-aware ordering
    pub fn is_greater_or_equal(&self, other: &Version) -> bool {
        self >= other
    }

    /// Compute the next version for a change classification.
    ///
    /// Before 1.0 the public contract is treated as unstable: a breaking change
    /// only bumps minor and a new feature only bumps patch. This is not
    /// standard semver behavior.
    ///
    /// | breaking | feature | major | result              |
    /// |----------|---------|-------|---------------------|
    /// | yes      | any     | 0     | minor + 1, patch 0  |
    /// | yes      | any     | >= 1  | major + 1, rest 0   |
    /// | no       | yes     | 0     | patch + 1           |
    /// | no       | yes     | >= 1  | minor + 1, patch 0  |
    /// | no       | no      | any   | patch + 1           |
    ///
    /// The result is always a final release. If the component to bump is
    /// already `u64::MAX`, see [`Version::bump`].
    pub fn increment(&self, breaking_change: bool, new_feature: bool) -> Self {
        self.bump(&VersionBump::for_change(
            self.major,
            breaking_change,
            new_feature,
        ))
    }

    /// Bump version according to bump type, dropping any release candidate.
    ///
    /// If the bumped component is already `u64::MAX`, the numbers are kept as
    /// they are and only the release candidate is dropped, so the result never
    /// orders below the input.
    pub fn bump(&self, bump_type: &VersionBump) -> Self {
        let bumped = match bump_type {
            VersionBump::Major => self
                .major
                .checked_add(1)
                .map(|major| Version::new(major, 0, 0)),
            VersionBump::Minor => self
                .minor
                .checked_add(1)
                .map(|minor| Version::new(self.major, minor, 0)),
            VersionBump::Patch => self
                .patch
                .checked_add(1)
                .map(|patch| Version::new(self.major, self.minor, patch)),
        };
        bumped.unwrap_or_else(|| Version::new(self.major, self.minor, self.patch))
    }

    /// Render as a tag, with the leading `v`
    pub fn to_tag(&self) -> String {
        format!("v{}", self)
    }
}

impl FromStr for Version {
    type Err = VtagError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(
                || match (self.release_candidate, other.release_candidate) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(a), Some(b)) => a.cmp(&b),
                },
            )
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(rc) = self.release_candidate {
            write!(f, "-rc{}", rc)?;
        }
        Ok(())
    }
}

/// Compare two possibly-absent versions.
///
/// Fails with [`VtagError::NilOperand`] naming the missing side; the greater
/// side is checked first.
pub fn compare_operands(greater: Option<&Version>, lesser: Option<&Version>) -> Result<bool> {
    let greater = greater.ok_or(VtagError::NilOperand(Side::Greater))?;
    let lesser = lesser.ok_or(VtagError::NilOperand(Side::Lesser))?;
    Ok(greater.is_greater_or_equal(lesser))
}

/// Parse two raw tags and report whether the first is `>=` the second.
///
/// A parse failure on either side is returned as-is; there is no fallback ordering.
pub fn is_greater_or_equal_tag(greater: &str, lesser: &str) -> Result<bool> {
    let greater = Version::parse(greater)?;
    let lesser = Version::parse(lesser)?;
    Ok(greater.is_greater_or_equal(&lesser))
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Pick the bump for a change classification given the current major version
    pub fn for_change(major: u64, breaking_change: bool, new_feature: bool) -> Self {
        match (breaking_change, new_feature, major) {
            (true, _, 0) => VersionBump::Minor,
            (true, _, _) => VersionBump::Major,
            (false, true, 0) => VersionBump::Patch,
            (false, true, _) => VersionBump::Minor,
            (false, false, _) => VersionBump::Patch,
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}
