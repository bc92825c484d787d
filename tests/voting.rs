use showmatch_terminal::vote::VoteBoard;

#[test]
fn seeded_options_keep_order_and_distinct_ids() {
    let board = VoteBoard::new(&["Sing", "Dance", "Act"]);
    let labels: Vec<&str> = board
        .options()
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    assert_eq!(labels, ["Sing", "Dance", "Act"]);

    let mut ids: Vec<&str> = board
        .options()
        .iter()
        .map(|option| option.id.as_str())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn vote_increments_only_the_chosen_option() {
    let mut board = VoteBoard::new(&["Sing", "Dance", "Act"]);
    board.vote(1);
    board.vote(1);
    board.vote(2);

    let tallies: Vec<u32> = board
        .options()
        .iter()
        .map(|option| option.votes)
        .collect();
    assert_eq!(tallies, [0, 2, 1]);
    assert_eq!(board.total_votes(), 3);
}

#[test]
fn vote_out_of_range_is_ignored() {
    let mut board = VoteBoard::new(&["Sing"]);
    assert!(board.vote(3).is_none());
    assert_eq!(board.total_votes(), 0);
}

#[test]
fn added_option_is_trimmed_and_starts_at_zero() {
    let mut board = VoteBoard::new(&["Sing"]);
    let added = board.add_option("  Backflip  ").expect("added");
    assert_eq!(added.label, "Backflip");
    assert_eq!(added.votes, 0);
    assert_eq!(board.len(), 2);
}

#[test]
fn blank_option_is_dropped() {
    let mut board = VoteBoard::new(&["Sing"]);
    assert!(board.add_option("").is_none());
    assert!(board.add_option("   ").is_none());
    assert_eq!(board.len(), 1);
}

#[test]
fn ids_stay_unique_after_additions() {
    let mut board = VoteBoard::new(&["Sing", "Dance"]);
    board.add_option("Act");
    board.add_option("Backflip");

    let mut ids: Vec<&str> = board
        .options()
        .iter()
        .map(|option| option.id.as_str())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
