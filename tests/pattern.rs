use std::io::Write;

use grid_life::board::{BoardError, load_pattern, step};
use tempfile::NamedTempFile;

fn write_pattern(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_pattern_file() {
    let file = write_pattern("001\n011\n000\n");
    let board = load_pattern(file.path()).unwrap();
    assert_eq!(board.dims(), (3, 3));
    assert_eq!(step(&board).to_pattern(), "011\n011\n000\n");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let err = load_pattern(&path).unwrap_err();
    match &err {
        BoardError::Io { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn malformed_file_is_rejected() {
    let file = write_pattern("010\n0101\n");
    assert!(matches!(
        load_pattern(file.path()),
        Err(BoardError::InvalidShape {
            row: 1,
            expected: 3,
            found: 4
        })
    ));

    let file = write_pattern("010\n0 1\n");
    assert!(matches!(
        load_pattern(file.path()),
        Err(BoardError::InvalidChar {
            line: 2,
            col: 2,
            ch: ' '
        })
    ));
}

#[test]
fn saved_generation_reloads_identically() {
    let file = write_pattern("0100\n0010\n1110\n0000\n");
    let board = load_pattern(file.path()).unwrap();
    let next = step(&board);

    let saved = write_pattern(&next.to_pattern());
    assert_eq!(load_pattern(saved.path()).unwrap(), next);
}
