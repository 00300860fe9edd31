//! Compare two perft divide listings and report extra and missing moves.

pub mod diff;
pub mod entry;
pub mod error;
pub mod session;

pub use diff::{MoveSet, Report, diff};
pub use entry::{DivideEntry, DivideMove, Promotion, parse_line};
pub use error::DiffError;
pub use session::run;
