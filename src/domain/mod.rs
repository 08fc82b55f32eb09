//! Domain types for the trivia API.
//!
//! This module provides:
//! - Category reference data and the id to type mapping
//! - Questions and boundary validation for new questions
//! - 1-based pagination windows

pub mod category;
pub mod pagination;
pub mod question;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::Page;
pub use question::{NewQuestion, Question, ValidationError};
