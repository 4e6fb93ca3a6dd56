pub mod seating_config;
