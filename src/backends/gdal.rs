//! Derived-view builder for the gdal (`SpatialRef`) backend.
//!
//! Compiled only with the `backend-gdal` feature. Without it, [`GdalCrs`]
//! is an uninhabited placeholder so that accessor signatures still exist
//! and return a typed missing-dependency error instead.

#[cfg(feature = "backend-gdal")]
use crate::crs::CanonicalCrs;
#[cfg(feature = "backend-gdal")]
use crate::error::UcrsError;

/// The native CRS object of the gdal backend.
#[cfg(feature = "backend-gdal")]
pub type GdalCrs = gdal::spatial_ref::SpatialRef;

/// Placeholder view type for builds without the gdal backend.
#[cfg(not(feature = "backend-gdal"))]
#[derive(Debug)]
pub enum GdalCrs {}

/// Builds the gdal-native object from the canonical representation.
///
/// Tiered like the readers elsewhere in this crate: registry code first,
/// then WKT, then the canonical proj string.
#[cfg(feature = "backend-gdal")]
pub(crate) fn build(canonical: &CanonicalCrs) -> Result<GdalCrs, UcrsError> {
    use gdal::spatial_ref::SpatialRef;

    let result = if let Some(code) = canonical.code() {
        SpatialRef::from_epsg(code)
    } else if let Some(wkt) = canonical.wkt() {
        SpatialRef::from_wkt(wkt)
    } else {
        SpatialRef::from_proj4(&canonical.to_proj_string())
    };
    result.map_err(|err| UcrsError::malformed(&canonical.to_proj_string(), err.into()))
}

/// Identifies a gdal-native object for canonical construction.
///
/// Returns the EPSG code when the reference carries an EPSG authority,
/// otherwise the exported proj string.
#[cfg(feature = "backend-gdal")]
pub(crate) fn identify(srs: &GdalCrs) -> Result<GdalIdentity, UcrsError> {
    let epsg = match (srs.auth_name(), srs.auth_code()) {
        (Ok(name), Ok(code)) if name.eq_ignore_ascii_case("EPSG") => u32::try_from(code).ok(),
        _ => None,
    };
    if let Some(code) = epsg {
        return Ok(GdalIdentity::Epsg(code));
    }
    let proj4 = srs
        .to_proj4()
        .map_err(|err| UcrsError::malformed("<gdal SpatialRef>", err.into()))?;
    Ok(GdalIdentity::ProjString(proj4))
}

/// How a gdal object identified itself during conversion to canonical.
#[cfg(feature = "backend-gdal")]
pub(crate) enum GdalIdentity {
    Epsg(u32),
    ProjString(String),
}
