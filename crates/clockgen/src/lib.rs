mod clock;
mod error;

pub use clock::{ClockModel, Phase};
pub use error::ClockError;
