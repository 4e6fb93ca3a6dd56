pub mod seating;
pub mod snapshot;
pub mod student;
