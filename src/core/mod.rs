pub mod alarm;
pub mod co2;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod input;
pub mod layout;
pub mod params;
pub mod smoothing;
pub mod tone;

pub use alarm::*;
pub use co2::*;
pub use dashboard::*;
pub use error::*;
pub use input::*;
pub use layout::*;
pub use params::*;
pub use smoothing::*;
pub use tone::*;
