pub mod dashboard;
pub mod round;
pub mod shot;
pub mod tables;
