//! CSV shot logs.
//!
//! One shot per row under the header `hole,category,distance,lie,result,extra`:
//!
//! | category   | distance        | lie            | result              | extra              |
//! |------------|-----------------|----------------|---------------------|--------------------|
//! | `tee`      | drive (yds)     | tee lie code   | remaining (yds)     |                    |
//! | `approach` | start (yds)     | approach code  | proximity (ft)      | `green` / `miss`   |
//! | `short`    | start (yds)     | short game code| proximity (ft)      |                    |
//! | `putt`     | start (ft)      | read           | `made` / `missed`   | remaining (ft)     |
//!
//! A putt read is a break code with an optional slope, e.g. `RL` or `LR/D`.
//! Rows are applied in file order. Bad rows, and rows for a hole that is
//! already holed out, are skipped and counted.

use crate::benchmarks::Benchmarks;
use crate::error::{SgError, SgResult};
use crate::lies::{ApproachLie, PuttBreak, PuttSlope, ShortGameLie, ShortGameShotType, TeeLie};
use crate::round::{ActiveRound, ApproachShot, Putt, ShortGameShot, TeeShot};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum ShotKind {
    Tee,
    Approach,
    Short,
    Putt,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShotLogReport {
    pub applied: usize,
    pub skipped: usize,
}

pub fn load_shot_log<P: AsRef<Path>>(
    path: P,
    b: &Benchmarks,
    round: &mut ActiveRound,
) -> SgResult<ShotLogReport> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading shot log");
    let file = File::open(path)?;
    read_shot_log(file, b, round)
}

pub fn read_shot_log<R: Read>(
    reader: R,
    b: &Benchmarks,
    round: &mut ActiveRound,
) -> SgResult<ShotLogReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut report = ShotLogReport::default();

    for (idx, result) in rdr.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let applied = result
            .map_err(SgError::from)
            .and_then(|rec| apply_row(&rec, b, round));

        match applied {
            Ok(()) => report.applied += 1,
            Err(e) => {
                warn!(line, error = %e, "skipping shot log row");
                report.skipped += 1;
            }
        }
    }

    if report.skipped > 0 {
        warn!(skipped = report.skipped, "shot log had invalid rows");
    }
    debug!(applied = report.applied, "shot log applied");
    Ok(report)
}

fn field(rec: &StringRecord, idx: usize) -> &str {
    rec.get(idx).unwrap_or("")
}

fn parse_num(rec: &StringRecord, idx: usize, name: &str) -> SgResult<f64> {
    let raw = field(rec, idx);
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SgError::Validation(format!("{} '{}' is not a number", name, raw)))
}

fn parse_opt_num(rec: &StringRecord, idx: usize, name: &str) -> SgResult<Option<f64>> {
    if field(rec, idx).is_empty() {
        return Ok(None);
    }
    parse_num(rec, idx, name).map(Some)
}

/// `RL`, `LR/D`, `/U` or empty. Missing parts take the defaults.
fn parse_read(raw: &str) -> SgResult<(PuttBreak, PuttSlope)> {
    let (break_code, slope_code) = raw.split_once('/').unwrap_or((raw, ""));
    let break_dir = match break_code.trim() {
        "" => PuttBreak::default(),
        code => PuttBreak::from_str(code)
            .map_err(|_| SgError::Validation(format!("unknown putt break '{}'", code)))?,
    };
    let slope = match slope_code.trim() {
        "" => PuttSlope::default(),
        code => PuttSlope::from_str(code)
            .map_err(|_| SgError::Validation(format!("unknown putt slope '{}'", code)))?,
    };
    Ok((break_dir, slope))
}

fn apply_row(rec: &StringRecord, b: &Benchmarks, round: &mut ActiveRound) -> SgResult<()> {
    let hole_number: u8 = field(rec, 0)
        .parse()
        .map_err(|_| SgError::Validation(format!("bad hole number '{}'", field(rec, 0))))?;
    let kind = ShotKind::from_str(field(rec, 1))
        .map_err(|_| SgError::Validation(format!("unknown category '{}'", field(rec, 1))))?;

    let hole = round.hole_mut(hole_number).ok_or_else(|| {
        SgError::Validation(format!("hole {} is not part of this round", hole_number))
    })?;
    if hole.is_holed_out() {
        return Err(SgError::Validation(format!(
            "hole {} is already holed out",
            hole_number
        )));
    }

    match kind {
        ShotKind::Tee => {
            if hole.tee_shot.is_some() {
                return Err(SgError::Validation(format!(
                    "hole {} already has a tee shot",
                    hole_number
                )));
            }
            let drive = parse_opt_num(rec, 2, "drive distance")?;
            let remaining = parse_opt_num(rec, 4, "remaining distance")?;
            let lie = TeeLie::from_code(field(rec, 3));
            hole.tee_shot = Some(TeeShot::new(
                b,
                hole.distance,
                hole.par,
                "",
                drive,
                remaining,
                lie,
            )?);
        }
        ShotKind::Approach => {
            let distance = parse_num(rec, 2, "distance")?;
            let proximity = parse_num(rec, 4, "proximity")?;
            let on_green = field(rec, 5).eq_ignore_ascii_case("green");
            hole.approaches.push(ApproachShot::new(
                b,
                distance,
                ApproachLie::from_code(field(rec, 3)),
                "",
                on_green,
                proximity,
            ));
        }
        ShotKind::Short => {
            let distance = parse_num(rec, 2, "distance")?;
            let proximity = parse_num(rec, 4, "proximity")?;
            let lie = ShortGameLie::from_code(field(rec, 3));
            let shot_type = match lie {
                ShortGameLie::GreensideBunker | ShortGameLie::FairwayBunker => {
                    ShortGameShotType::Bunker
                }
                _ => ShortGameShotType::Chip,
            };
            hole.short_game_shots.push(ShortGameShot::new(
                b, distance, lie, shot_type, "", proximity,
            ));
        }
        ShotKind::Putt => {
            let distance = parse_num(rec, 2, "putt distance")?;
            let made = match field(rec, 4).to_ascii_lowercase().as_str() {
                "made" | "yes" | "1" => true,
                "missed" | "miss" | "no" | "0" => false,
                other => {
                    return Err(SgError::Validation(format!(
                        "putt result '{}' is neither made nor missed",
                        other
                    )))
                }
            };
            let remaining = parse_opt_num(rec, 5, "remaining distance")?;
            let (break_dir, slope) = parse_read(field(rec, 3))?;
            let putt_number = hole.next_putt_number();
            hole.putts.push(
                Putt::new(b, putt_number, distance, made, remaining)
                    .with_read(break_dir, slope, None),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::standard;
    use crate::course::{NineSelection, TeeBox};

    fn round() -> ActiveRound {
        ActiveRound::start("2024-05-01", "Test", &TeeBox::empty("White"), NineSelection::Full)
            .unwrap()
    }

    #[test]
    fn test_rows_land_on_their_holes() {
        let csv = "hole,category,distance,lie,result,extra\n\
                   1,tee,250,F,150,\n\
                   1,approach,150,F,12,green\n\
                   1,putt,12,,missed,2\n\
                   1,putt,2,,made,\n";
        let mut r = round();
        let report = read_shot_log(csv.as_bytes(), standard(), &mut r).unwrap();
        assert_eq!(report, ShotLogReport { applied: 4, skipped: 0 });

        let hole = &r.holes[0];
        assert!(hole.tee_shot.is_some());
        assert_eq!(hole.putts.len(), 2);
        assert_eq!(hole.putts[1].putt_number, 2);
        assert_eq!(hole.strokes(), 4);
    }

    #[test]
    fn test_bad_rows_are_counted() {
        let csv = "hole,category,distance,lie,result,extra\n\
                   1,bogus,250,F,150,\n\
                   99,putt,10,,made,\n\
                   1,putt,ten,,made,\n\
                   1,tee,,F,,\n\
                   2,short,15,GBS,4,\n";
        let mut r = round();
        let report = read_shot_log(csv.as_bytes(), standard(), &mut r).unwrap();
        assert_eq!(report.applied, 1);
        assert_eq!(report.skipped, 4);
        assert_eq!(
            r.holes[1].short_game_shots[0].shot_type,
            ShortGameShotType::Bunker
        );
    }

    #[test]
    fn test_putt_read_codes() {
        assert_eq!(
            parse_read("").unwrap(),
            (PuttBreak::Straight, PuttSlope::Flat)
        );
        assert_eq!(
            parse_read("RL").unwrap(),
            (PuttBreak::RightToLeft, PuttSlope::Flat)
        );
        assert_eq!(
            parse_read("LR/D").unwrap(),
            (PuttBreak::LeftToRight, PuttSlope::Downhill)
        );
        assert_eq!(
            parse_read("/U").unwrap(),
            (PuttBreak::Straight, PuttSlope::Uphill)
        );
        assert!(parse_read("XX").is_err());
        assert!(parse_read("S/Q").is_err());
    }

    #[test]
    fn test_shots_after_holing_out_are_skipped() {
        let csv = "hole,category,distance,lie,result,extra\n\
                   1,short,15,FR,0,\n\
                   1,putt,3,,made,\n\
                   2,putt,8,S,made,\n\
                   2,putt,1,,made,\n";
        let mut r = round();
        let report = read_shot_log(csv.as_bytes(), standard(), &mut r).unwrap();
        assert_eq!(report, ShotLogReport { applied: 2, skipped: 2 });
        assert!(r.holes[0].short_game_shots[0].is_holed());
        assert!(r.holes[0].putts.is_empty());
        assert_eq!(r.holes[1].putts.len(), 1);
    }
}
