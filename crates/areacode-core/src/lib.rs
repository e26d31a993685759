pub mod domain;
pub mod error;
pub mod parser;
pub mod resolve;
pub mod table;

pub use domain::*;
pub use error::{CoreError, ResolveError};
pub use parser::{parse_phone_number, ParsedNumber, Prefix};
pub use resolve::resolve;
pub use table::{LocationTable, LocationTableBuilder};
