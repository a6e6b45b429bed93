use std::io::Cursor;

use showdown::{score_batch, BatchError, ParseError, RecordError, Tally};

const SAMPLE: &str = "\
5H 5C 6S 7S KD 2C 3S 8S 8D TD
5D 8C 9S JS AC 2C 5C 7D 8S QH
2D 9C AS AH AC 3D 6D 7D TD QD
4D 6S 9H QH QC 3D 6D 7H QD QS
2H 2D 4C 4D 4S 3C 3D 3S 9S 9D
TH JH QH KH AH 9H 8H 7H 6H 5H
";

#[test]
fn scores_a_batch_in_input_order() {
    let tally = score_batch(Cursor::new(SAMPLE)).unwrap();

    // Records 2, 4, 5 and 6 fall to player one; 1 and 3 to player two
    assert_eq!(tally.first_wins, 4);
    assert_eq!(tally.second_wins, 2);
    assert_eq!(tally.ties, 0);
    assert_eq!(tally.records(), 6);
}

#[test]
fn counts_exact_ties() {
    let input = "AS KD 9H 6C 3S AH KC 9D 6S 3H\n";
    let tally = score_batch(Cursor::new(input)).unwrap();
    assert_eq!(
        tally,
        Tally {
            first_wins: 0,
            second_wins: 0,
            ties: 1
        }
    );
}

#[test]
fn empty_input_scores_nothing() {
    let tally = score_batch(Cursor::new("")).unwrap();
    assert_eq!(tally, Tally::default());
}

#[test]
fn skips_blank_lines() {
    let input = "\n5H 5C 6S 7S KD 2C 3S 8S 8D TD\n   \n\n5D 8C 9S JS AC 2C 5C 7D 8S QH\n\n";
    let tally = score_batch(Cursor::new(input)).unwrap();
    assert_eq!(tally.records(), 2);
}

#[test]
fn aborts_on_short_record_with_line_number() {
    let input = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n5H 5C 6S 7S KD\n";
    let err = score_batch(Cursor::new(input)).unwrap_err();

    match err {
        BatchError::Record { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(source, RecordError::WrongTokenCount(5));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn aborts_on_bad_card_token() {
    let input = "5H 5C 6S 7S KD 2C 3S 8S 8D ZD\n";
    let err = score_batch(Cursor::new(input)).unwrap_err();

    match err {
        BatchError::Record { line, source } => {
            assert_eq!(line, 1);
            assert_eq!(
                source,
                RecordError::Card(ParseError::UnknownRank("Z".to_string()))
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_record_aborts_before_later_records_score() {
    // The bad second line stops the run even though line three is fine
    let input = "\
5H 5C 6S 7S KD 2C 3S 8S 8D TD
not a record
5D 8C 9S JS AC 2C 5C 7D 8S QH
";
    assert!(matches!(
        score_batch(Cursor::new(input)),
        Err(BatchError::Record { line: 2, .. })
    ));
}

#[test]
fn tally_serializes_to_json() {
    let tally = score_batch(Cursor::new(SAMPLE)).unwrap();
    let json = serde_json::to_string(&tally).unwrap();
    assert_eq!(json, r#"{"first_wins":4,"second_wins":2,"ties":0}"#);
}
