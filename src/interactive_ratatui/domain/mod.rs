pub mod content;
pub mod models;
