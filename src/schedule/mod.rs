pub mod dates;
pub mod resolver;
pub mod roster;
pub mod color;

pub use resolver::{resolve, Rotation, PERIOD_DAYS};
pub use roster::Roster;
pub use color::color_for;
