use crate::reports;
use clap::{Args, ValueEnum};
use strokes_gained::benchmarks::standard;
use strokes_gained::lies::ShortGameLie;
use strokes_gained::SgResult;
use strum::IntoEnumIterator;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableName {
    Tee,
    Position,
    Approach,
    ShortGame,
    Putting,
    Proximity,
}

#[derive(Args, Debug, Clone)]
pub struct TablesArgs {
    /// Only print one table
    #[arg(long, value_enum)]
    pub table: Option<TableName>,
}

pub fn run(args: TablesArgs) -> SgResult<()> {
    let b = standard();
    let wants = |t: TableName| args.table.is_none() || args.table == Some(t);

    if wants(TableName::Tee) {
        reports::print_tee_tables(b);
    }
    if wants(TableName::Position) {
        reports::print_position_table(b);
    }
    if wants(TableName::Approach) {
        reports::print_approach_table(b);
    }
    if wants(TableName::ShortGame) {
        for lie in ShortGameLie::iter() {
            reports::print_simple_table(
                &format!("Short Game: {}", lie.label()),
                "Yards",
                b.short_game.for_lie(lie),
            );
        }
    }
    if wants(TableName::Putting) {
        reports::print_putting_table(b);
    }
    if wants(TableName::Proximity) {
        reports::print_simple_table("Proximity to Putts", "Feet", &b.proximity);
    }
    Ok(())
}
