pub mod area_code;
pub mod location;

pub use area_code::AreaCode;
pub use location::{LocalArea, LocationRecord, RecordKind};
