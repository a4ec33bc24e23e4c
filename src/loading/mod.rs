//! This module is responsible for parsing directions-style JSON
//! responses into the route model.
//!
//! The wire shape is mirrored field-for-field by the raw serde structs;
//! the processor turns raw objects into model values, decoding embedded
//! polylines and computing the route's derived fields. Single-object
//! construction is strict, list construction is lenient: a malformed
//! list element is skipped with a warning instead of failing the whole
//! list.

mod de;
mod processor;
mod raw_types;

pub use processor::{parse_directions_response, parse_route, parse_routes};
