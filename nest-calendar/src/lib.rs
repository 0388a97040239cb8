//! Calendar engine for the Nest planner.
//!
//! Pure date arithmetic (leap years, month lengths, weekdays), the 42-cell
//! month grid, task identities and the date string formats exchanged with
//! planner clients. Nothing here performs I/O or holds state.

mod date_string;
pub mod domain;
mod engine;
mod error;
pub mod schedule;

pub use date_string::*;
pub use domain::*;
pub use engine::{days_in_month, is_leap_year, weekday_of};
pub use error::*;
