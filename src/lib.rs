//! Navigation geometry and route-model library.
//!
//! Three pieces fit together here:
//!
//! - spherical-geometry primitives and path containment queries over
//!   latitude/longitude pairs ([`geometry`]),
//! - the compact encoded-polyline codec ([`polyline`]),
//! - an immutable route tree (route, legs, steps, transit details)
//!   parsed from a directions-style JSON response ([`model`],
//!   [`loading`]).
//!
//! Everything is a pure synchronous function over immutable inputs;
//! values are `Send + Sync` and safe to query concurrently. Fetching
//! the directions payload is the caller's business, this crate starts
//! at the JSON document.
//!
//! ```
//! use wayline::prelude::*;
//!
//! let path = wayline::polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@")?;
//! assert!(path[0].approx_eq(&LatLng::new(38.5, -120.2)));
//!
//! let meters = distance_between(path[0], path[1]);
//! assert!(meters > 250_000.0);
//! # Ok::<(), wayline::Error>(())
//! ```

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod polyline;
pub mod prelude;

pub use error::Error;
pub use geometry::{COORD_EPSILON, EARTH_RADIUS, LatLng};
pub use model::Route;
