use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strokes_gained::benchmarks::{BenchmarkTable, Benchmarks};
use strokes_gained::lies::{ApproachLie, PositionCategory};
use strokes_gained::round::{DashboardStats, Round, RoundSgSummary};
use strokes_gained::sg::{ShotCategory, ShotSg};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Green when strokes were gained, red when lost.
fn sg_cell(sg: f64) -> Cell {
    let cell = Cell::new(format!("{:+.2}", sg));
    if sg > 0.0 {
        cell.fg(Color::Green)
    } else if sg < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

pub fn print_shot(label: &str, result: &ShotSg) {
    let mut table = new_table();
    table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new("")]);
    table.add_row(vec![
        Cell::new("Start"),
        Cell::new(format!("{:.4}", result.start_benchmark)),
    ]);
    table.add_row(vec![
        Cell::new("End"),
        Cell::new(format!("{:.4}", result.end_benchmark)),
    ]);
    table.add_row(vec![
        Cell::new("SG").add_attribute(Attribute::Bold),
        sg_cell(result.sg),
    ]);
    align_right(&mut table, 1, 1);
    println!("\n{}", table);
}

pub fn print_round_holes(round: &Round) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Hole").add_attribute(Attribute::Bold),
        Cell::new("Tee"),
        Cell::new("Par"),
        Cell::new("Yds"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Putts"),
        Cell::new("FIR"),
        Cell::new("GIR"),
        Cell::new("OTT"),
        Cell::new("APP"),
        Cell::new("ARG"),
        Cell::new("PUTT"),
        Cell::new("SG").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 2, 12);

    for hole in &round.holes {
        let fir = match hole.fairway_hit() {
            Some(true) => "Y",
            Some(false) => "-",
            None => "",
        };
        let gir = if hole.green_in_regulation() { "Y" } else { "-" };
        let tee = hole.tee_shot.as_ref().map_or("", |t| t.lie.label());

        let mut row = vec![
            Cell::new(hole.hole_number).add_attribute(Attribute::Bold),
            Cell::new(tee),
            Cell::new(hole.par),
            Cell::new(format!("{:.0}", hole.distance)),
            Cell::new(hole.score()).fg(Color::Cyan),
            Cell::new(hole.putts.len()),
            Cell::new(fir),
            Cell::new(gir),
        ];
        row.extend(
            ShotCategory::iter().map(|c| Cell::new(format!("{:.2}", hole.category_sg(c)))),
        );
        row.push(sg_cell(hole.sg_total()));
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_category_summary(sg: &RoundSgSummary) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Strokes Gained"),
    ]);
    for category in ShotCategory::iter() {
        table.add_row(vec![
            Cell::new(category.to_string()),
            sg_cell(sg.category(category)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        sg_cell(sg.sg_total).add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 1, 1);
    println!("\n{}", table);
}

pub fn print_round_stats(round: &Round) {
    let s = &round.stats;
    let mut table = new_table();
    let title = if round.nine.is_nine_hole() {
        format!("{} ({}, {} nine)", round.course_name, round.tee_box_name, round.nine)
    } else {
        format!("{} ({})", round.course_name, round.tee_box_name)
    };
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Score"),
        Cell::new(format!("{} ({:+})", round.score, round.to_par())),
    ]);
    table.add_row(vec![
        Cell::new("Fairways"),
        Cell::new(format!("{} ({:.0}%)", s.fir, s.fir_pct * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Greens"),
        Cell::new(format!("{} ({:.0}%)", s.gir, s.gir_pct * 100.0)),
    ]);
    table.add_row(vec![Cell::new("Putts"), Cell::new(s.total_putts)]);
    table.add_row(vec![Cell::new("Penalties"), Cell::new(s.penalties)]);
    align_right(&mut table, 1, 1);
    println!("\n{}", table);
}

pub fn print_dashboard(d: &DashboardStats) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Last {} of {} rounds", d.window, d.rounds_played))
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Avg To Par"),
        Cell::new(format!("{:+.1}", d.avg_to_par)),
    ]);
    table.add_row(vec![Cell::new("Avg SG Total"), sg_cell(d.avg_sg_total)]);
    table.add_row(vec![Cell::new("Avg SG OTT"), sg_cell(d.avg_sg_ott)]);
    table.add_row(vec![Cell::new("Avg SG APP"), sg_cell(d.avg_sg_app)]);
    table.add_row(vec![Cell::new("Avg SG ARG"), sg_cell(d.avg_sg_arg)]);
    table.add_row(vec![Cell::new("Avg SG PUTT"), sg_cell(d.avg_sg_putt)]);
    table.add_row(vec![
        Cell::new("Fairways"),
        Cell::new(format!("{:.0}%", d.avg_fir)),
    ]);
    table.add_row(vec![
        Cell::new("Greens"),
        Cell::new(format!("{:.0}%", d.avg_gir)),
    ]);
    table.add_row(vec![
        Cell::new("Putts"),
        Cell::new(format!("{:.1}", d.avg_putts)),
    ]);
    table.add_row(vec![Cell::new("Low Round"), Cell::new(d.low_round)]);
    table.add_row(vec![Cell::new("Best SG"), sg_cell(d.best_sg)]);

    // Falling scores are improvement, rising SG is improvement.
    let score_trend = Cell::new(format!("{:+.2}", d.score_trend));
    let score_trend = match d.score_trend {
        t if t < 0.0 => score_trend.fg(Color::Green),
        t if t > 0.0 => score_trend.fg(Color::Red),
        _ => score_trend,
    };
    table.add_row(vec![Cell::new("Score Trend"), score_trend]);
    table.add_row(vec![Cell::new("SG Trend"), sg_cell(d.sg_trend)]);

    align_right(&mut table, 1, 1);
    println!("\n{}", table);
}

pub fn print_simple_table(title: &str, unit: &str, t: &BenchmarkTable<f64>) {
    println!("\n{}", title);
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(unit).add_attribute(Attribute::Bold),
        Cell::new("Expected"),
    ]);
    for (key, value) in t.iter() {
        table.add_row(vec![
            Cell::new(format!("{:.0}", key)),
            Cell::new(format!("{:.2}", value)),
        ]);
    }
    align_right(&mut table, 0, 1);
    println!("{}", table);
}

pub fn print_tee_tables(b: &Benchmarks) {
    print_simple_table("Tee Shot: Par 4", "Yards", &b.tee_par4);
    print_simple_table("Tee Shot: Par 5", "Yards", &b.tee_par5);
}

pub fn print_position_table(b: &Benchmarks) {
    println!("\nPosition After Tee Shot");
    let mut table = new_table();
    let mut header = vec![Cell::new("Yards").add_attribute(Attribute::Bold)];
    header.extend(PositionCategory::iter().map(|c| Cell::new(c.to_string())));
    table.add_row(header);

    for (key, row) in b.position.iter() {
        let mut cells = vec![Cell::new(format!("{:.0}", key))];
        cells.extend(PositionCategory::iter().map(|c| Cell::new(format!("{:.2}", row.value(c)))));
        table.add_row(cells);
    }
    align_right(&mut table, 0, 6);
    println!("{}", table);
}

pub fn print_approach_table(b: &Benchmarks) {
    print_simple_table("Approach From Fairway", "Yards", &b.approach_fairway);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Lie").add_attribute(Attribute::Bold),
        Cell::new("Adjustment"),
    ]);
    for lie in ApproachLie::iter() {
        table.add_row(vec![
            Cell::new(lie.label()),
            Cell::new(format!("{:+.2}", b.approach_lie.for_lie(lie))),
        ]);
    }
    align_right(&mut table, 1, 1);
    println!("{}", table);
}

pub fn print_putting_table(b: &Benchmarks) {
    println!("\nPutting");
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Feet").add_attribute(Attribute::Bold),
        Cell::new("Avg Putts"),
        Cell::new("Make %"),
    ]);
    for (key, p) in b.putting.iter() {
        table.add_row(vec![
            Cell::new(format!("{:.0}", key)),
            Cell::new(format!("{:.3}", p.avg_putts)),
            Cell::new(format!("{:.0}%", p.make_percent * 100.0)),
        ]);
    }
    align_right(&mut table, 0, 2);
    println!("{}", table);
}
