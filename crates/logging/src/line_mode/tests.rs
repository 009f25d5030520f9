use super::LineMode;

#[test]
fn line_mode_conversions_agree_with_append_newline() {
    assert_eq!(LineMode::from(true), LineMode::WithNewline);
    assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

    let append: bool = LineMode::WithNewline.into();
    assert!(append);

    let append: bool = LineMode::WithoutNewline.into();
    assert!(!append);
}

#[test]
fn default_line_mode_appends_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}
