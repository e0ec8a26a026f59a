/// Starting benchmark for every par-3 tee shot.
/// Par-3 tee shots are not attributed through the distance tables.
pub const PAR3_START_BENCHMARK: f64 = 3.0;

/// Ending benchmark after a tee shot that drew a penalty, regardless of lie.
pub const PENALTY_END_BENCHMARK: f64 = 4.0;

/// Ending benchmark for an approach that missed the green by more than
/// `CHIP_THRESHOLD_FEET`.
pub const CHIP_BENCHMARK: f64 = 3.25;

/// Proximity (feet) above which a missed green counts as a chip situation.
pub const CHIP_THRESHOLD_FEET: f64 = 100.0;

/// Putts from this distance (feet) or closer start at exactly one stroke.
pub const GIMME_DISTANCE_FEET: f64 = 1.0;

/// Putt benchmark inside the gimme distance.
pub const GIMME_BENCHMARK: f64 = 1.0;

/// Remaining distance (feet) assumed for a missed putt with no follow-up distance.
pub const DEFAULT_MISS_FEET: f64 = 2.0;

/// Rounds averaged by the dashboard.
pub const DEFAULT_STATS_WINDOW: usize = 10;

/// Rounds per side of the trend comparison.
pub const DEFAULT_TREND_WINDOW: usize = 5;

/// Holes in a full round.
pub const FULL_ROUND_HOLES: usize = 18;

/// Holes in a nine-hole round.
pub const NINE_HOLES: usize = 9;
