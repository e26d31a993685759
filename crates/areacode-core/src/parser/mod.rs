//! Phone-number grammar.
//!
//! Input is processed in fixed stages: lexing, digit grouping, layout
//! (3-3-4 body with an optional trunk digit) and finally trunk validation.
//! A layout failure is reported before the trunk is looked at, so a
//! malformed number with a `0` trunk is "not found" rather than invalid.

mod grammar;
mod lexer;

use crate::domain::AreaCode;

pub use grammar::parse_phone_number;

/// What preceded the ten-digit national number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    None,
    /// A bare `+` (as in `+-212-...`) with no country digit.
    Plus,
    One,
    PlusOne,
}

impl Prefix {
    pub fn has_trunk(self) -> bool {
        matches!(self, Prefix::One | Prefix::PlusOne)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedNumber {
    pub prefix: Prefix,
    pub area_code: AreaCode,
    pub exchange: String,
    pub subscriber: String,
}

impl ParsedNumber {
    /// The ten-digit number without any prefix.
    pub fn national(&self) -> String {
        format!("{}{}{}", self.area_code, self.exchange, self.subscriber)
    }
}
