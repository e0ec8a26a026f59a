pub mod hole;
pub mod rolling;
pub mod scorecard;
pub mod shots;
pub mod summary;

pub use self::hole::Hole;
pub use self::rolling::{dashboard_stats, DashboardStats};
pub use self::scorecard::{rederive_all, ActiveRound, Round, RoundStats};
pub use self::shots::{ApproachShot, Putt, ShortGameShot, TeeShot};
pub use self::summary::{calculate_round_sg, RoundSgSummary};
