pub mod attendance;
pub mod billing;
pub mod calendar;
mod error;
pub mod models;
pub mod ports;
pub mod recurrence;
pub mod schedule;
pub mod services;

pub use error::*;
