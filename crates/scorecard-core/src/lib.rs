pub mod classifier;
pub mod config;
pub mod errors;
pub mod form;
pub mod model;
pub mod report;
pub mod storage;
