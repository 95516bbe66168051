use chrono::{Local, NaiveDate};
use dashkit_calendar::{date_range, date_range_from, format_date, Direction};

#[test]
fn lengths_match_count_in_both_directions() {
    for count in 0..8usize {
        assert_eq!(date_range(count, Direction::Forward).unwrap().len(), count);
        assert_eq!(date_range(count, Direction::Before).unwrap().len(), count);
    }
}

#[test]
fn today_is_first_forward_and_last_backward() {
    // Capture "today" once; re-anchoring through date_range_from keeps the
    // assertion stable across a midnight boundary mid-test.
    let today = Local::now().date_naive();
    let label = format_date(today, Some("MM-dd")).unwrap();

    let forward = date_range_from(today, 5, Direction::Forward).unwrap();
    assert_eq!(forward[0], label);

    let backward = date_range_from(today, 5, Direction::Before).unwrap();
    assert_eq!(backward[4], label);
}

#[test]
fn backward_and_forward_meet_at_the_anchor() {
    let anchor = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let forward = date_range_from(anchor, 3, Direction::Forward).unwrap();
    let backward = date_range_from(anchor, 3, Direction::Before).unwrap();
    assert_eq!(forward, vec!["02-29", "03-01", "03-02"]);
    assert_eq!(backward, vec!["02-27", "02-28", "02-29"]);
    assert_eq!(forward[0], backward[2]);
}
