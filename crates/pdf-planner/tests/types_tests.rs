use pdf_planner::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::Remarkable.dimensions_pt(), (1404.0, 1872.0));
    assert_eq!(PaperSize::RemarkablePro.dimensions_pt(), (1620.0, 2160.0));

    let custom = PaperSize::Custom {
        width_pt: 100.0,
        height_pt: 200.0,
    };
    assert_eq!(custom.dimensions_pt(), (100.0, 200.0));
}

#[test]
fn test_paper_size_names() {
    assert_eq!(PaperSize::Remarkable.name(), "reMarkable");
    assert_eq!(PaperSize::RemarkablePro.name(), "reMarkable Paper Pro");
    assert_eq!(
        PaperSize::Custom {
            width_pt: 1.0,
            height_pt: 1.0
        }
        .name(),
        "Custom"
    );
}

#[test]
fn test_defaults() {
    assert_eq!(PaperSize::default(), PaperSize::Remarkable);
    assert_eq!(Orientation::default(), Orientation::Landscape);
    assert_eq!(Handedness::default(), Handedness::RightHanded);
    assert!(Handedness::LeftHanded.is_left_handed());
    assert!(!Handedness::RightHanded.is_left_handed());
}

#[test]
fn test_overflow_message_names_counts() {
    let err = PlannerError::LayoutOverflow {
        rows: 6,
        cols: 7,
        skip: 6,
        count: 40,
    };
    let msg = err.to_string();
    assert!(msg.contains("rows 6"));
    assert!(msg.contains("cols 7"));
    assert!(msg.contains("skip 6"));
    assert!(msg.contains("entries 40"));
}

#[test]
fn test_transition_message() {
    let err = PlannerError::InvalidTransition {
        node: "Day page 'January 01 2021'".to_string(),
        from: BuildState::Linked,
        to: BuildState::Annotated,
    };
    assert_eq!(
        err.to_string(),
        "Invalid build transition for Day page 'January 01 2021': Linked -> Annotated"
    );
}
