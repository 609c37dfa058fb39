use vtag::boundary::BoundaryWarning;
use vtag::domain::{select_latest, Version};

#[test]
fn test_boundary_warning_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "release-123".to_string(),
        reason: "invalid version: release-123".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Cannot parse tag 'release-123'"),
        "Message should name the tag, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("invalid version"),
        "Message should contain the reason, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_candidate_skipped_display() {
    let warning = BoundaryWarning::CandidateSkipped {
        tag: "v2.0.0-rc1".to_string(),
    };
    assert_eq!(warning.to_string(), "Skipping release candidate 'v2.0.0-rc1'");
}

#[test]
fn test_boundary_warning_no_valid_tags_display() {
    assert_eq!(
        BoundaryWarning::NoValidTags.to_string(),
        "No valid version tags found"
    );
}

#[test]
fn test_select_latest_from_git_tag_output() {
    let output = "v0.1.0\nv0.2.0-rc1\nv0.2.0\nlatest\nv0.10.0-rc3\n";
    let selection = select_latest(output.lines(), true);

    let (tag, version) = selection.latest.unwrap();
    assert_eq!(tag.name, "v0.10.0-rc3");
    assert_eq!(version, Version::candidate(0, 10, 0, 3));
    assert_eq!(selection.warnings.len(), 1);
    assert!(matches!(
        &selection.warnings[0],
        BoundaryWarning::UnparsableTag { tag, .. } if tag == "latest"
    ));
}

#[test]
fn test_select_latest_final_only() {
    let output = "v0.1.0\nv0.2.0-rc1\nv0.10.0-rc3\n";
    let selection = select_latest(output.lines(), false);

    assert_eq!(selection.latest.unwrap().1, Version::new(0, 1, 0));
    assert_eq!(selection.warnings.len(), 2);
}

#[test]
fn test_select_latest_all_invalid() {
    let selection = select_latest(["1.0.0", "v1"], true);
    assert!(selection.latest.is_none());
    assert_eq!(selection.warnings.last(), Some(&BoundaryWarning::NoValidTags));
    assert_eq!(selection.warnings.len(), 3);
}
