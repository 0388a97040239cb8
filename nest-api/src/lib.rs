//! Planner domain for Nest: tasks keyed by calendar moments, the ports
//! they are stored and served through, and configuration.

pub mod adapters;
pub mod config;
pub mod domain;
