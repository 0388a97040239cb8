mod calendar_date;
mod calendar_time;
mod month_grid;
mod task_identity;
mod weekday;

pub use calendar_date::*;
pub use calendar_time::*;
pub use month_grid::*;
pub use task_identity::*;
pub use weekday::*;
