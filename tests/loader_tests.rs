use std::fs::File;
use std::io::Write;
use strokes_gained::benchmarks::standard;
use strokes_gained::course::{NineSelection, TeeBox};
use strokes_gained::lies::TeeLie;
use strokes_gained::loader::{load_shot_log, read_shot_log};
use strokes_gained::round::ActiveRound;
use tempfile::tempdir;

const HEADER: &str = "hole,category,distance,lie,result,extra";

fn active(nine: NineSelection) -> ActiveRound {
    ActiveRound::start("2024-08-01", "Pine Hollow", &TeeBox::empty("White"), nine).unwrap()
}

#[test]
fn test_load_full_hole_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shots.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "{}", HEADER).unwrap();
    writeln!(f, "1,tee,260,RL,,").unwrap();
    writeln!(f, "1,approach,140,R,45,miss").unwrap();
    writeln!(f, "1,short,12,R,4,").unwrap();
    writeln!(f, "1,putt,4,,made,").unwrap();
    drop(f);

    let mut round = active(NineSelection::Full);
    let report = load_shot_log(&path, standard(), &mut round).unwrap();
    assert_eq!(report.applied, 4);
    assert_eq!(report.skipped, 0);

    let hole = &round.holes[0];
    let tee = hole.tee_shot.as_ref().unwrap();
    assert_eq!(tee.lie, TeeLie::RoughLeft);
    assert_eq!(tee.distance_remaining, 140.0);
    assert!(!hole.approaches[0].on_green);
    assert_eq!(hole.short_game_shots.len(), 1);
    assert!(hole.putts[0].made);
    assert_eq!(hole.strokes(), 4);
    assert!(!hole.green_in_regulation());
}

#[test]
fn test_header_only_log_is_empty() {
    let mut round = active(NineSelection::Full);
    let report = read_shot_log(HEADER.as_bytes(), standard(), &mut round).unwrap();
    assert_eq!(report.applied, 0);
    assert!(round.holes.iter().all(|h| !h.has_shots()));
}

#[test]
fn test_rows_outside_the_nine_are_skipped() {
    let log = format!("{}\n1,putt,10,,made,\n12,putt,10,,made,\n", HEADER);
    let mut round = active(NineSelection::Back);
    let report = read_shot_log(log.as_bytes(), standard(), &mut round).unwrap();
    assert_eq!(report.applied, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(round.hole_mut(12).unwrap().putts.len(), 1);
}

#[test]
fn test_second_tee_shot_is_rejected() {
    let log = format!("{}\n1,tee,250,F,,\n1,tee,250,F,,\n", HEADER);
    let mut round = active(NineSelection::Full);
    let report = read_shot_log(log.as_bytes(), standard(), &mut round).unwrap();
    assert_eq!(report.applied, 1);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let mut round = active(NineSelection::Full);
    assert!(load_shot_log(dir.path().join("nope.csv"), standard(), &mut round).is_err());
}
