//! Text renderings of a [`DistanceTable`] for embedding in other sources.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::direction::Direction;
use crate::distance::DistanceTable;
use crate::error::ParseFormatError;
use crate::square::Square;

/// Identifier used by the declaration formats.
pub const TABLE_NAME: &str = "MAX_SLIDING_DISTANCE";

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Bare nested brace literal: `{{0, 7, ...}, {0, 7, ...}, ...}`.
    #[default]
    Braces,
    /// C++ declaration wrapping the brace literal.
    Cpp,
    /// Rust `const` item with bracketed rows.
    Rust,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Braces, Format::Cpp, Format::Rust];

    pub const fn name(self) -> &'static str {
        match self {
            Format::Braces => "braces",
            Format::Cpp => "cpp",
            Format::Rust => "rust",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFormatError {
                found: s.to_string(),
            })
    }
}

/// Nested list literal with configurable delimiters.
struct Literal<'a> {
    table: &'a DistanceTable,
    open: char,
    close: char,
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.open)?;
        for (i, row) in self.table.rows().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.open)?;
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "{}", self.close)?;
        }
        write!(f, "{}", self.close)
    }
}

/// Brace literal, identical to [`Format::Braces`] output.
impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = Literal {
            table: self,
            open: '{',
            close: '}',
        };
        fmt::Display::fmt(&literal, f)
    }
}

/// Render `table` in `format`. Values are never altered, only their text.
pub fn render(table: &DistanceTable, format: Format) -> String {
    let out = match format {
        Format::Braces => table.to_string(),
        Format::Cpp => format!(
            "constexpr int {TABLE_NAME}[{}][{}] = {table};",
            Square::COUNT,
            Direction::COUNT
        ),
        Format::Rust => {
            let literal = Literal {
                table,
                open: '[',
                close: ']',
            };
            format!(
                "pub const {TABLE_NAME}: [[u8; {}]; {}] = {literal};",
                Direction::COUNT,
                Square::COUNT
            )
        }
    };
    debug!(%format, bytes = out.len(), "rendered distance table");
    out
}
