pub mod seating_snapshot;
pub mod seating_snapshot_detail;
