//! EPSG registry access and CRS text classification.
//!
//! The registry itself is the bundled `crs-definitions` table (code →
//! proj string + WKT). The helpers here also cover the text-shaped
//! questions the input dispatcher asks: is this WKT, is this an
//! authority-prefixed code, which EPSG code does a WKT document claim.

use crate::error::BackendError;

/// A registry entry: the proj string and WKT for one EPSG code.
#[derive(Clone, Copy, Debug)]
pub struct RegistryDef {
    pub proj4: &'static str,
    pub wkt: &'static str,
}

/// Resolves an EPSG code against the bundled registry.
///
/// Codes above `u16::MAX` cannot appear in the table and are reported as
/// registry misses.
pub fn resolve_code(code: u32) -> Result<RegistryDef, BackendError> {
    u16::try_from(code)
        .ok()
        .and_then(crs_definitions::from_code)
        .map(|def| RegistryDef {
            proj4: def.proj4,
            wkt: def.wkt,
        })
        .ok_or(BackendError::UnknownCode(code))
}

/// Parses an authority-prefixed code such as `EPSG:4326` (any case).
///
/// Returns `None` when the text is not authority-shaped at all; returns
/// an error when it is, but names a non-EPSG authority or a non-numeric
/// code.
pub fn parse_authority(text: &str) -> Option<Result<u32, BackendError>> {
    let (authority, code) = text.split_once(':')?;
    let authority = authority.trim();
    if authority.is_empty() || !authority.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if !authority.eq_ignore_ascii_case("EPSG") {
        return Some(Err(BackendError::UnknownAuthority(authority.to_string())));
    }
    match code.trim().parse::<u32>() {
        Ok(code) => Some(Ok(code)),
        Err(_) => Some(Err(BackendError::InvalidAuthorityCode(
            code.trim().to_string(),
        ))),
    }
}

/// Returns true when the text is shaped like a WKT document: a leading
/// alphabetic keyword immediately followed by a bracketed body.
pub fn looks_like_wkt(text: &str) -> bool {
    let Some(bracket) = text.find('[') else {
        return false;
    };
    let keyword = text[..bracket].trim();
    !keyword.is_empty()
        && keyword
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Extracts the EPSG code a WKT document claims for the CRS itself.
///
/// The CRS-level `AUTHORITY` node is the last one in WKT1 (earlier ones
/// belong to the datum, spheroid, and units); WKT2 uses `ID` instead.
pub fn code_from_wkt(wkt: &str) -> Option<u32> {
    let upper = wkt.to_ascii_uppercase();
    for marker in ["AUTHORITY[\"EPSG\",", "ID[\"EPSG\","] {
        if let Some(pos) = upper.rfind(marker) {
            let rest = &wkt[pos + marker.len()..];
            let digits: String = rest
                .chars()
                .skip_while(|c| *c == '"' || c.is_whitespace())
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if let Ok(code) = digits.parse() {
                return Some(code);
            }
        }
    }
    None
}
