//! The closed input union the adapter dispatches on.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use super::canonical::CanonicalCrs;

/// One CRS input variant. Exactly one variant is active per construction
/// call; dispatch happens once, in [`CanonicalCrs::from_input`].
///
/// The backend-object variants only exist when the matching feature is
/// compiled in, and are converted to the canonical representation
/// immediately at construction.
pub enum CrsInput {
    /// An EPSG registry code, e.g. `4326`.
    Epsg(u32),
    /// Free text: a numeric code, `EPSG:n`, a WKT document, or a proj
    /// string. Classified once at construction.
    Text(String),
    /// A proj parameter mapping, e.g. `{"proj": "longlat", "datum": "WGS84"}`.
    Params(BTreeMap<String, String>),
    /// An already-canonical representation (the primary-backend object).
    /// Accepted directly, no conversion.
    Canonical(CanonicalCrs),
    /// An input that can never resolve (e.g. a negative code), carried
    /// so construction can report the actual offending value.
    Invalid(String),
    /// A native object of the proj backend.
    #[cfg(feature = "backend-proj")]
    Proj(proj::Proj),
    /// A native object of the gdal backend.
    #[cfg(feature = "backend-gdal")]
    Gdal(gdal::spatial_ref::SpatialRef),
}

impl From<u32> for CrsInput {
    fn from(code: u32) -> Self {
        CrsInput::Epsg(code)
    }
}

impl From<u16> for CrsInput {
    fn from(code: u16) -> Self {
        CrsInput::Epsg(code.into())
    }
}

impl From<i32> for CrsInput {
    fn from(code: i32) -> Self {
        match u32::try_from(code) {
            Ok(code) => CrsInput::Epsg(code),
            Err(_) => CrsInput::Invalid(format!("negative EPSG code {code}")),
        }
    }
}

impl From<&str> for CrsInput {
    fn from(text: &str) -> Self {
        CrsInput::Text(text.to_string())
    }
}

impl From<String> for CrsInput {
    fn from(text: String) -> Self {
        CrsInput::Text(text)
    }
}

impl From<BTreeMap<String, String>> for CrsInput {
    fn from(map: BTreeMap<String, String>) -> Self {
        CrsInput::Params(map)
    }
}

impl From<CanonicalCrs> for CrsInput {
    fn from(canonical: CanonicalCrs) -> Self {
        CrsInput::Canonical(canonical)
    }
}

#[cfg(feature = "backend-proj")]
impl From<proj::Proj> for CrsInput {
    fn from(value: proj::Proj) -> Self {
        CrsInput::Proj(value)
    }
}

#[cfg(feature = "backend-gdal")]
impl From<gdal::spatial_ref::SpatialRef> for CrsInput {
    fn from(srs: gdal::spatial_ref::SpatialRef) -> Self {
        CrsInput::Gdal(srs)
    }
}

// Backend objects do not all implement Debug; identify variants by name.
impl std::fmt::Debug for CrsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrsInput::Epsg(code) => f.debug_tuple("Epsg").field(code).finish(),
            CrsInput::Text(text) => f.debug_tuple("Text").field(text).finish(),
            CrsInput::Params(map) => f.debug_tuple("Params").field(map).finish(),
            CrsInput::Canonical(canonical) => f.debug_tuple("Canonical").field(canonical).finish(),
            CrsInput::Invalid(reason) => f.debug_tuple("Invalid").field(reason).finish(),
            #[cfg(feature = "backend-proj")]
            CrsInput::Proj(_) => f.write_str("Proj(..)"),
            #[cfg(feature = "backend-gdal")]
            CrsInput::Gdal(_) => f.write_str("Gdal(..)"),
        }
    }
}

/// Deserializes from the data shapes a config file can hold: a number, a
/// string, or a parameter mapping.
impl<'de> Deserialize<'de> for CrsInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u32),
            Text(String),
            Params(BTreeMap<String, String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Code(code) => CrsInput::Epsg(code),
            Raw::Text(text) => CrsInput::Text(text),
            Raw::Params(map) => CrsInput::Params(map),
        })
    }
}
