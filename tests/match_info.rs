use showmatch_terminal::match_info::format_kickoff;

#[test]
fn iso_kickoff_is_prettified() {
    assert_eq!(format_kickoff("2024-03-15T20:00"), "Mar 15, 2024 20:00 UTC");
    assert_eq!(
        format_kickoff(" 2024-03-15 20:00:00 "),
        "Mar 15, 2024 20:00 UTC"
    );
}

#[test]
fn empty_kickoff_is_tbd() {
    assert_eq!(format_kickoff(""), "TBD");
    assert_eq!(format_kickoff("   "), "TBD");
}

#[test]
fn unparsable_kickoff_falls_back_to_cleaned_text() {
    assert_eq!(format_kickoff("soon-ish"), "soon-ish");
    assert_eq!(format_kickoff("2024-03-15Tlate"), "2024-03-15 late");
}
