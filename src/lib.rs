pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod quiz;

pub use config::Config;
pub use db::{init_db, seed_demo_data, Repository};
pub use domain::{Category, NewQuestion, Page, Question};
pub use error::AppError;
pub use quiz::{QuestionPicker, RandomPicker, SeededPicker};
