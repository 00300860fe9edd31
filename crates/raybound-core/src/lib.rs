//! Board geometry and the precomputed sliding-distance table.

mod direction;
mod distance;
mod error;
mod file;
mod rank;
mod render;
mod square;

pub use direction::Direction;
pub use distance::{DistanceTable, MAX_SLIDING_DISTANCE, Ray, generate};
pub use error::ParseFormatError;
pub use file::File;
pub use rank::Rank;
pub use render::{Format, TABLE_NAME, render};
pub use square::Square;
