use rstest::{fixture, rstest};
use strokes_gained::config::StatsParams;
use strokes_gained::course::{NineSelection, TeeBox};
use strokes_gained::round::{dashboard_stats, ActiveRound, Round};

fn round(date: &str, score: u32, sg_total: f64) -> Round {
    let mut r = ActiveRound::start(date, "Pine Hollow", &TeeBox::empty("White"), NineSelection::Full)
        .unwrap()
        .complete(Some(score));
    r.sg.sg_total = sg_total;
    r.sg.sg_putt = sg_total / 2.0;
    r.stats.total_putts = 30;
    r
}

/// Twelve rounds, newest first: five at 80, five at 85, two old ones at 90.
#[fixture]
fn history() -> Vec<Round> {
    let mut rounds = Vec::new();
    for i in 0..5 {
        rounds.push(round(&format!("2024-07-{:02}", 20 - i), 80, 1.0));
    }
    for i in 0..5 {
        rounds.push(round(&format!("2024-06-{:02}", 20 - i), 85, -1.0));
    }
    rounds.push(round("2024-05-02", 90, 3.0));
    rounds.push(round("2024-05-01", 90, -4.0));
    rounds
}

#[rstest]
fn test_window_averages(history: Vec<Round>) {
    let s = dashboard_stats(&history, &StatsParams::default()).unwrap();
    assert_eq!(s.rounds_played, 12);
    assert_eq!(s.window, 10);
    assert_eq!(s.avg_to_par, 10.5);
    assert_eq!(s.avg_sg_total, 0.0);
    assert_eq!(s.avg_sg_putt, 0.0);
    assert_eq!(s.avg_putts, 30.0);
    assert_eq!(s.avg_fir, 0.0);
}

#[rstest]
fn test_all_time_records(history: Vec<Round>) {
    let s = dashboard_stats(&history, &StatsParams::default()).unwrap();
    assert_eq!(s.low_round, 80);
    assert_eq!(s.best_sg, 3.0);
}

#[rstest]
fn test_trends_compare_adjacent_windows(history: Vec<Round>) {
    let s = dashboard_stats(&history, &StatsParams::default()).unwrap();
    assert_eq!(s.score_trend, -5.0);
    assert_eq!(s.sg_trend, 2.0);
}

#[rstest]
#[case(3, 2)]
#[case(4, 2)]
fn test_custom_windows(history: Vec<Round>, #[case] stats_window: usize, #[case] trend_window: usize) {
    let params = StatsParams {
        stats_window,
        trend_window,
    };
    let s = dashboard_stats(&history, &params).unwrap();
    assert_eq!(s.window, stats_window);
    assert_eq!(s.avg_to_par, 8.0);
    // Both trend windows sit inside the 80s block.
    assert_eq!(s.score_trend, 0.0);
}

#[test]
fn test_trend_needs_two_full_windows() {
    let rounds: Vec<Round> = (0..9).map(|i| round(&format!("2024-01-{:02}", 9 - i), 70 + i, 0.0)).collect();
    let s = dashboard_stats(&rounds, &StatsParams::default()).unwrap();
    assert_eq!(s.window, 9);
    assert_eq!(s.score_trend, 0.0);
    assert_eq!(s.sg_trend, 0.0);
    assert_eq!(s.avg_to_par, 2.0);
}

#[test]
fn test_no_rounds_means_no_dashboard() {
    assert!(dashboard_stats(&[], &StatsParams::default()).is_none());
}

#[test]
fn test_percentages_are_whole_numbers() {
    let mut a = round("2024-02-02", 75, 0.0);
    a.stats.fir_pct = 0.57;
    a.stats.gir_pct = 0.44;
    let mut b = round("2024-02-01", 77, 0.0);
    b.stats.fir_pct = 0.65;
    b.stats.gir_pct = 0.5;

    let s = dashboard_stats(&[a, b], &StatsParams::default()).unwrap();
    assert_eq!(s.avg_fir, 61.0);
    assert_eq!(s.avg_gir, 47.0);
    assert_eq!(s.avg_to_par, 4.0);
}
