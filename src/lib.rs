pub mod advice;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod planner;
pub mod state;
pub mod stats;
pub mod store;
pub mod subjects;
pub mod tasks;
