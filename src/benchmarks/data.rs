// Reference tables derived from PGA Tour scoring averages.
// Keys are distances; see each table for units.

use super::{LieAdjustment, PositionRow, PuttBenchmark};

/// Expected strokes from the tee of a par 4, keyed by hole length (yards).
pub const TEE_SHOT_PAR4: &[(f64, f64)] = &[
    (300.0, 3.75),
    (326.0, 3.82),
    (351.0, 3.89),
    (376.0, 3.96),
    (401.0, 4.03),
    (426.0, 4.10),
    (451.0, 4.17),
    (476.0, 4.24),
    (500.0, 4.31),
];

/// Expected strokes from the tee of a par 5, keyed by hole length (yards).
pub const TEE_SHOT_PAR5: &[(f64, f64)] = &[
    (450.0, 4.6),
    (476.0, 4.7),
    (501.0, 4.8),
    (526.0, 4.9),
    (551.0, 5.0),
    (576.0, 5.1),
    (600.0, 5.2),
];

const fn row(fairway: f64, rough: f64, heavy_rough: f64, trees: f64, bunker: f64) -> PositionRow {
    PositionRow {
        fairway,
        rough,
        heavy_rough,
        trees,
        bunker,
        penalty: Some(4.0),
    }
}

/// Expected strokes after the tee shot, bracketed by yards remaining.
pub const POSITION: &[(f64, PositionRow)] = &[
    (0.0, row(2.35, 2.45, 2.60, 2.80, 2.55)),
    (51.0, row(2.50, 2.60, 2.75, 2.95, 2.70)),
    (76.0, row(2.65, 2.75, 2.90, 3.10, 2.85)),
    (101.0, row(2.80, 2.90, 3.05, 3.25, 3.00)),
    (126.0, row(2.91, 3.01, 3.16, 3.36, 3.11)),
    (151.0, row(2.98, 3.08, 3.23, 3.43, 3.18)),
    (176.0, row(3.16, 3.26, 3.41, 3.61, 3.36)),
    (201.0, row(3.40, 3.50, 3.65, 3.85, 3.60)),
    (226.0, row(3.65, 3.75, 3.90, 4.10, 3.85)),
    (251.0, row(3.90, 4.00, 4.15, 4.35, 4.10)),
    (276.0, row(4.10, 4.20, 4.35, 4.55, 4.30)),
    (300.0, row(4.30, 4.40, 4.55, 4.75, 4.50)),
];

/// Expected strokes from the fairway, keyed by yards to the hole.
pub const APPROACH_FAIRWAY: &[(f64, f64)] = &[
    (50.0, 2.40),
    (60.0, 2.50),
    (70.0, 2.55),
    (80.0, 2.60),
    (90.0, 2.65),
    (100.0, 2.70),
    (110.0, 2.73),
    (120.0, 2.77),
    (130.0, 2.80),
    (140.0, 2.84),
    (150.0, 2.91),
    (160.0, 2.95),
    (170.0, 2.98),
    (180.0, 3.04),
    (190.0, 3.10),
    (200.0, 3.16),
    (210.0, 3.23),
    (220.0, 3.30),
    (230.0, 3.37),
    (240.0, 3.45),
    (250.0, 3.53),
];

pub const APPROACH_LIE_ADJUSTMENT: LieAdjustment = LieAdjustment {
    fairway: 0.0,
    rough: 0.10,
    heavy_rough: 0.20,
    trees: 0.40,
    fairway_bunker: 0.25,
};

// Short game tables, keyed by yards to the hole.

pub const SHORT_GAME_FRINGE: &[(f64, f64)] = &[
    (0.0, 1.85),
    (1.0, 1.90),
    (2.0, 1.95),
    (3.0, 2.00),
    (4.0, 2.05),
    (5.0, 2.08),
];

pub const SHORT_GAME_FAIRWAY: &[(f64, f64)] = &[
    (0.0, 2.10),
    (6.0, 2.20),
    (11.0, 2.25),
    (16.0, 2.30),
    (21.0, 2.35),
    (26.0, 2.40),
    (31.0, 2.45),
    (36.0, 2.50),
    (41.0, 2.55),
    (46.0, 2.60),
];

pub const SHORT_GAME_ROUGH: &[(f64, f64)] = &[
    (0.0, 2.20),
    (6.0, 2.30),
    (11.0, 2.35),
    (16.0, 2.40),
    (21.0, 2.45),
    (26.0, 2.50),
    (31.0, 2.55),
    (36.0, 2.60),
    (41.0, 2.65),
    (46.0, 2.70),
];

// The 20-yard bracket is part of the published data.
pub const SHORT_GAME_HEAVY_ROUGH: &[(f64, f64)] = &[
    (0.0, 2.35),
    (6.0, 2.45),
    (11.0, 2.50),
    (20.0, 2.55),
    (21.0, 2.60),
    (26.0, 2.65),
    (31.0, 2.70),
    (36.0, 2.75),
    (41.0, 2.80),
    (46.0, 2.85),
];

pub const SHORT_GAME_GREENSIDE_BUNKER: &[(f64, f64)] = &[
    (0.0, 2.40),
    (6.0, 2.47),
    (11.0, 2.52),
    (16.0, 2.57),
    (21.0, 2.61),
    (26.0, 2.66),
    (31.0, 2.70),
    (36.0, 2.75),
    (41.0, 2.80),
    (46.0, 2.85),
];

pub const SHORT_GAME_FAIRWAY_BUNKER: &[(f64, f64)] = &[
    (0.0, 2.50),
    (6.0, 2.57),
    (11.0, 2.62),
    (16.0, 2.67),
    (21.0, 2.71),
    (26.0, 2.76),
    (31.0, 2.80),
    (36.0, 2.85),
    (41.0, 2.90),
    (46.0, 2.95),
];

const fn putt(avg_putts: f64, make_percent: f64) -> PuttBenchmark {
    PuttBenchmark {
        avg_putts,
        make_percent,
    }
}

/// Expected putts and make rate, keyed by feet. Spacing widens past 25 ft.
pub const PUTTING: &[(f64, PuttBenchmark)] = &[
    (1.0, putt(1.00, 1.00)),
    (2.0, putt(1.01, 0.96)),
    (3.0, putt(1.04, 0.88)),
    (4.0, putt(1.07, 0.77)),
    (5.0, putt(1.15, 0.66)),
    (6.0, putt(1.20, 0.58)),
    (7.0, putt(1.26, 0.51)),
    (8.0, putt(1.32, 0.45)),
    (9.0, putt(1.39, 0.40)),
    (10.0, putt(1.46, 0.36)),
    (11.0, putt(1.52, 0.32)),
    (12.0, putt(1.58, 0.29)),
    (13.0, putt(1.64, 0.27)),
    (14.0, putt(1.69, 0.25)),
    (15.0, putt(1.74, 0.23)),
    (16.0, putt(1.78, 0.21)),
    (17.0, putt(1.81, 0.20)),
    (18.0, putt(1.84, 0.19)),
    (19.0, putt(1.87, 0.18)),
    (20.0, putt(1.89, 0.17)),
    (21.0, putt(1.91, 0.16)),
    (22.0, putt(1.93, 0.16)),
    (23.0, putt(1.95, 0.15)),
    (24.0, putt(1.96, 0.15)),
    (25.0, putt(1.98, 0.14)),
    (27.0, putt(1.99, 0.14)),
    (29.0, putt(2.01, 0.13)),
    (31.0, putt(2.03, 0.13)),
    (33.0, putt(2.05, 0.12)),
    (35.0, putt(2.06, 0.12)),
    (38.0, putt(2.08, 0.11)),
    (41.0, putt(2.10, 0.11)),
    (45.0, putt(2.12, 0.10)),
    (50.0, putt(2.15, 0.09)),
    (60.0, putt(2.20, 0.08)),
    (70.0, putt(2.25, 0.06)),
    (80.0, putt(2.28, 0.05)),
    (90.0, putt(2.31, 0.04)),
    (100.0, putt(2.34, 0.03)),
];

/// Expected putts to finish from a proximity (feet). 120 ft is the missed-green chip.
pub const PROXIMITY_TO_PUTTS: &[(f64, f64)] = &[
    (0.0, 0.0),
    (1.0, 1.00),
    (2.0, 1.01),
    (3.0, 1.04),
    (4.0, 1.07),
    (5.0, 1.15),
    (6.0, 1.20),
    (8.0, 1.32),
    (10.0, 1.46),
    (12.0, 1.58),
    (15.0, 1.74),
    (18.0, 1.84),
    (20.0, 1.89),
    (21.0, 1.91),
    (24.0, 1.96),
    (25.0, 1.98),
    (30.0, 2.03),
    (33.0, 2.05),
    (40.0, 2.10),
    (45.0, 2.12),
    (48.0, 2.15),
    (51.0, 2.15),
    (60.0, 2.20),
    (65.0, 2.22),
    (70.0, 2.25),
    (75.0, 2.27),
    (80.0, 2.28),
    (90.0, 2.31),
    (100.0, 2.34),
    (120.0, 3.25),
];
