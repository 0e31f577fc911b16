//! Encoded polyline format with a precision of five decimals.
//!
//! Every coordinate is stored as the delta to the previous one, latitude first. A delta is scaled by
//! 1e5, zig-zag encoded and split into 5-bit chunks, least significant first. Each chunk is offset by
//! 63 to land in printable ASCII and all but the last chunk carry the 0x20 continuation bit.

use crate::domain::{Coordinate, CoordinateError, Path};
use thiserror::Error;

const FACTOR: f64 = 1e5;
const OFFSET: u8 = 63;
const CONTINUATION_BIT: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;
// At most seven 5-bit chunks per value
const MAX_SHIFT: u32 = 30;

#[derive(Error, Debug, PartialEq)]
pub enum PolylineError {
    #[error("invalid polyline character at index {index}")]
    InvalidCharacter { index: usize },
    #[error("polyline ends in the middle of a coordinate")]
    Truncated,
    #[error("polyline value starting at index {index} overflows")]
    Overflow { index: usize },
    #[error("polyline point out of range: {0}")]
    OutOfRange(#[from] CoordinateError),
}

pub fn decode(encoded: &str) -> Result<Path, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        let start = index;
        latitude = latitude.checked_add(decode_value(bytes, &mut index)?).ok_or(PolylineError::Overflow { index: start })?;
        if index >= bytes.len() {
            return Err(PolylineError::Truncated);
        }

        let start = index;
        longitude = longitude.checked_add(decode_value(bytes, &mut index)?).ok_or(PolylineError::Overflow { index: start })?;

        points.push(Coordinate::new(latitude as f64 / FACTOR, longitude as f64 / FACTOR)?);
    }

    Ok(Path::new(points))
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let start = *index;
    let mut result: u64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index).ok_or(PolylineError::Truncated)?;
        if !(OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::InvalidCharacter { index: *index });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { index: start });
        }

        let chunk = (byte - OFFSET) as u64;
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let value = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !value } else { value })
}

pub fn encode(path: &Path) -> String {
    let mut encoded = String::new();
    let (mut previous_latitude, mut previous_longitude) = (0i64, 0i64);

    for point in path.iter() {
        let latitude = (point.latitude() * FACTOR).round() as i64;
        let longitude = (point.longitude() * FACTOR).round() as i64;

        encode_value(latitude - previous_latitude, &mut encoded);
        encode_value(longitude - previous_longitude, &mut encoded);

        previous_latitude = latitude;
        previous_longitude = longitude;
    }

    encoded
}

fn encode_value(value: i64, output: &mut String) {
    let mut remaining = ((value << 1) ^ (value >> 63)) as u64;

    while remaining >= CONTINUATION_BIT {
        output.push((((remaining & CHUNK_MASK) | CONTINUATION_BIT) as u8 + OFFSET) as char);
        remaining >>= 5;
    }
    output.push((remaining as u8 + OFFSET) as char);
}
