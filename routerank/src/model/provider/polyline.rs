use super::ProviderError;

const PRECISION: f64 = 1e5;

/// decodes a polyline encoded with the Google algorithm at precision 5
/// into (lat, lon) pairs.
pub fn decode_polyline(encoded: &str) -> Result<Vec<(f64, f64)>, ProviderError> {
    let bytes = encoded.as_bytes();
    let mut coordinates = vec![];
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    while index < bytes.len() {
        let (dlat, next) = decode_value(bytes, index)?;
        if next >= bytes.len() {
            return Err(ProviderError::InvalidPolyline(
                next,
                String::from("latitude without a matching longitude"),
            ));
        }
        let (dlon, next) = decode_value(bytes, next)?;
        let overflow =
            || ProviderError::InvalidPolyline(index, String::from("coordinate overflows 64 bits"));
        lat = lat.checked_add(dlat).ok_or_else(overflow)?;
        lon = lon.checked_add(dlon).ok_or_else(overflow)?;
        index = next;
        coordinates.push((lat as f64 / PRECISION, lon as f64 / PRECISION));
    }
    Ok(coordinates)
}

/// reads one zigzag varint of 5-bit chunks starting at `start`.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), ProviderError> {
    let mut result: i64 = 0;
    let mut shift = 0;
    let mut index = start;
    loop {
        let byte = *bytes.get(index).ok_or_else(|| {
            ProviderError::InvalidPolyline(index, String::from("truncated value"))
        })?;
        if !(63..=126).contains(&byte) {
            return Err(ProviderError::InvalidPolyline(
                index,
                format!("character '{}' outside of the encoding alphabet", byte as char),
            ));
        }
        if shift > 60 {
            return Err(ProviderError::InvalidPolyline(
                index,
                String::from("value overflows 64 bits"),
            ));
        }
        let chunk = (byte - 63) as i64;
        index += 1;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }
    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok((value, index))
}
