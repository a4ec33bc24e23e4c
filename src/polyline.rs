//! Encoded-polyline codec.
//!
//! The standard delta/varint text encoding: coordinates scaled by 1e5,
//! each value a signed delta from the previous point (the first point
//! is relative to (0, 0)), zig-zag encoded, split into 5-bit chunks
//! with a continuation bit and offset by 63 into printable ASCII.

use crate::error::Error;
use crate::geometry::LatLng;

const PRECISION: f64 = 1e5;

/// Decodes an encoded polyline string into its coordinate sequence.
///
/// An empty string decodes to an empty sequence. A string that ends in
/// the middle of a varint chunk sequence, or after a latitude with no
/// following longitude, fails with [`Error::TruncatedPolyline`]; a byte
/// outside the printable `63..=126` range fails with
/// [`Error::InvalidPolylineByte`]. Both carry the byte offset.
pub fn decode(encoded: &str) -> Result<Vec<LatLng>, Error> {
    let bytes = encoded.as_bytes();
    let mut path = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0usize;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(Error::TruncatedPolyline { offset: index });
        }
        lng += decode_value(bytes, &mut index)?;
        path.push(LatLng::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }
    Ok(path)
}

/// Reads one zig-zag varint starting at `*index`, advancing it past
/// the consumed bytes.
fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, Error> {
    let mut result = 0u64;
    let mut shift = 0u32;
    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(Error::TruncatedPolyline { offset: *index });
        };
        if !(63..=126).contains(&byte) {
            return Err(Error::InvalidPolylineByte {
                byte,
                offset: *index,
            });
        }
        // A conformant value is at most 7 chunks; runs long enough to
        // push the shift past 63 bits can only come from corrupt input.
        if shift > 63 {
            return Err(Error::InvalidData(format!(
                "polyline chunk run exceeds 64 bits at byte {}",
                *index
            )));
        }
        *index += 1;
        let chunk = u64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }
    // Undo the zig-zag: the low bit carries the sign.
    let value = if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok(value as i64)
}

/// Encodes a coordinate sequence into the compact polyline string.
///
/// Exact inverse of [`decode`] at 1e-5 degree resolution; coordinates
/// are rounded to 5 decimal places on the way in.
#[must_use]
pub fn encode(path: &[LatLng]) -> String {
    let mut encoded = String::with_capacity(path.len() * 6);
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;
    for point in path {
        let lat = (point.latitude * PRECISION).round() as i64;
        let lng = (point.longitude * PRECISION).round() as i64;
        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }
    encoded
}

fn encode_value(value: i64, out: &mut String) {
    // Zig-zag so small negative deltas stay short.
    let mut v = ((value << 1) ^ (value >> 63)) as u64;
    while v >= 0x20 {
        out.push(char::from((0x20 | (v & 0x1f) as u8) + 63));
        v >>= 5;
    }
    out.push(char::from(v as u8 + 63));
}
