//! Tests for move log persistence.

use std::io::Write;
use strictly_reversi::{GameRecord, Outcome, Position, Side, move_log, replay};
use tempfile::{NamedTempFile, TempDir};

fn record(process: &str, black: u8, white: u8) -> GameRecord {
    let mut record = GameRecord::new();
    for token in process.as_bytes().chunks(3) {
        let mv: strictly_reversi::Move = std::str::from_utf8(token)
            .expect("ascii")
            .parse()
            .expect("token");
        record.append(mv.side, mv.position).expect("append");
    }
    record
        .finalize(Outcome::from_counts(black, white), black, white)
        .expect("finalize");
    record
}

#[test]
fn test_append_creates_parent_directories() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("data").join("game_result.txt");

    move_log::append_to_path(&path, &record("bD6", 4, 1)).expect("append");
    move_log::append_to_path(&path, &record("bC5", 4, 1)).expect("append");

    let text = std::fs::read_to_string(&path).expect("read");
    assert_eq!(
        text,
        "{\"result\":{\"black\":4,\"white\":1},\"process\":\"bD6\"}\n\
         {\"result\":{\"black\":4,\"white\":1},\"process\":\"bC5\"}\n"
    );

    let records = move_log::read_path(&path).expect("read records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].moves()[0].position, Position::new(2, 4));
}

#[test]
fn test_reads_historical_spelling() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"{{"result": {{"black": 13, "wihte": 0}}, "process": "bD6wC4bD3wC6bB5wE6bD7wC5bF5"}}"#
    )
    .expect("write");

    let records = move_log::read_path(file.path()).expect("read");
    let result = records[0].result().expect("finalized");
    assert_eq!(*result.white(), 0);
    assert_eq!(*result.outcome(), Outcome::BlackWin);

    let replayed = replay::replay(&records[0]).expect("replay");
    assert_eq!(replayed.frames().len(), 10);
    assert_eq!(*replayed.outcome(), Some(Outcome::BlackWin));
}

#[test]
fn test_missing_log_is_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = move_log::read_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(err.message.starts_with("Failed to open"));
}

#[test]
fn test_record_sides_survive_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("log.txt");
    let original = record("bD6wC4", 3, 3);
    move_log::append_to_path(&path, &original).expect("append");

    let records = move_log::read_path(&path).expect("read");
    assert_eq!(records, vec![original]);
    assert_eq!(records[0].moves()[1].side, Side::White);
}
