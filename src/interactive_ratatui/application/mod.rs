pub mod search_service;
pub mod timer;
