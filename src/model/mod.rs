pub mod error;
pub mod hole;
pub mod round;
pub mod session;
pub mod shot;
pub mod types;

pub use error::*;
pub use hole::*;
pub use round::*;
pub use session::*;
pub use shot::*;
pub use types::*;
