mod error;
mod requests;
mod responses;

pub use error::*;
pub use requests::*;
pub use responses::*;
