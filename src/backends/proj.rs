//! Derived-view builder for the `proj` crate backend.
//!
//! Compiled only with the `backend-proj` feature. Without it, [`ProjCrs`]
//! is an uninhabited placeholder so that accessor signatures still exist
//! and return a typed missing-dependency error instead.

#[cfg(feature = "backend-proj")]
use crate::crs::CanonicalCrs;
#[cfg(feature = "backend-proj")]
use crate::error::{BackendError, UcrsError};

/// The native CRS object of the proj backend.
#[cfg(feature = "backend-proj")]
pub type ProjCrs = proj::Proj;

/// Placeholder view type for builds without the proj backend.
#[cfg(not(feature = "backend-proj"))]
#[derive(Debug)]
pub enum ProjCrs {}

/// Builds the proj-native object from the canonical representation.
///
/// Prefers the registry code (PROJ resolves `EPSG:n` against its own
/// database) and falls back to the canonical proj string.
#[cfg(feature = "backend-proj")]
pub(crate) fn build(canonical: &CanonicalCrs) -> Result<ProjCrs, UcrsError> {
    let definition = match canonical.code() {
        Some(code) => format!("EPSG:{code}"),
        None => canonical.to_proj_string(),
    };
    proj::Proj::new(&definition)
        .map_err(|err| UcrsError::malformed(&definition, BackendError::Proj(err.to_string())))
}

/// Extracts a canonical definition string from a proj-native object.
///
/// PROJ reports definitions without the `+` prefixes; the proj-string
/// parser accepts both forms.
#[cfg(feature = "backend-proj")]
pub(crate) fn definition(value: &ProjCrs) -> Result<String, UcrsError> {
    value
        .def()
        .map_err(|err| UcrsError::malformed("<proj object>", BackendError::Proj(err.to_string())))
}
