mod agenda;
mod ids;
mod task;

pub use agenda::*;
pub use ids::*;
pub use task::*;
