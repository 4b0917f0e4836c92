//! The canonical CRS representation every input is normalized to.

use proj4rs::Proj;

use super::input::CrsInput;
use super::params::{CrsKind, ProjParams};
use super::registry;
use crate::error::{BackendError, UcrsError};

/// The single source-of-truth CRS representation.
///
/// Constructed once per adapter instance from whatever input was supplied
/// and never mutated afterwards. Holds the EPSG code when one is known,
/// the normalized parameter map, the WKT text when one is known (supplied
/// or registry-provided), and the validated primary-backend object.
pub struct CanonicalCrs {
    code: Option<u32>,
    params: ProjParams,
    wkt: Option<String>,
    proj: Proj,
}

impl CanonicalCrs {
    /// Dispatches an input variant once and normalizes it.
    ///
    /// Optional-backend objects are converted here, at construction; the
    /// backend may not be consulted again afterwards.
    pub fn from_input(input: CrsInput) -> Result<Self, UcrsError> {
        match input {
            CrsInput::Epsg(code) => Self::from_epsg(code),
            CrsInput::Text(text) => Self::from_text(&text),
            CrsInput::Params(map) => {
                if map.is_empty() {
                    return Err(UcrsError::invalid("parameter mapping is empty"));
                }
                Self::from_params(ProjParams::from_map(&map))
            }
            // The primary-backend representation is already canonical.
            CrsInput::Canonical(canonical) => Ok(canonical),
            CrsInput::Invalid(reason) => Err(UcrsError::invalid(reason)),
            #[cfg(feature = "backend-proj")]
            CrsInput::Proj(value) => {
                let definition = crate::backends::proj::definition(&value)?;
                Self::from_params(ProjParams::parse(&definition))
            }
            #[cfg(feature = "backend-gdal")]
            CrsInput::Gdal(srs) => match crate::backends::gdal::identify(&srs)? {
                crate::backends::gdal::GdalIdentity::Epsg(code) => Self::from_epsg(code),
                crate::backends::gdal::GdalIdentity::ProjString(proj4) => {
                    Self::from_params(ProjParams::parse(&proj4))
                }
            },
        }
    }

    /// Resolves an EPSG code through the registry.
    pub fn from_epsg(code: u32) -> Result<Self, UcrsError> {
        let echo = format!("EPSG:{code}");
        let def =
            registry::resolve_code(code).map_err(|source| UcrsError::malformed(&echo, source))?;
        let params = ProjParams::parse(def.proj4);
        let proj = Proj::from_proj_string(def.proj4)
            .map_err(|err| UcrsError::malformed(&echo, err.into()))?;
        Ok(Self {
            code: Some(code),
            params,
            wkt: Some(def.wkt.to_string()),
            proj,
        })
    }

    /// Classifies and resolves free text: numeric code, `EPSG:n`, WKT, or
    /// a proj string. Anything else is malformed; only emptiness is an
    /// invalid input.
    pub fn from_text(text: &str) -> Result<Self, UcrsError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(UcrsError::invalid("input string is empty"));
        }
        if let Ok(code) = text.parse::<u32>() {
            return Self::from_epsg(code);
        }
        if registry::looks_like_wkt(text) {
            return Self::from_wkt(text);
        }
        if let Some(parsed) = registry::parse_authority(text) {
            let code = parsed.map_err(|source| UcrsError::malformed(text, source))?;
            return Self::from_epsg(code);
        }
        if text.starts_with('+') {
            return Self::from_params(ProjParams::parse(text));
        }
        Err(UcrsError::malformed(text, BackendError::UnrecognizedText))
    }

    /// Imports a WKT document via the primary backend's WKT importer.
    ///
    /// The authority code embedded in the WKT is used for identity only;
    /// the document itself must convert cleanly regardless.
    pub fn from_wkt(wkt: &str) -> Result<Self, UcrsError> {
        let proj_string = proj4wkt::wkt_to_projstring(wkt)
            .map_err(|err| UcrsError::malformed(wkt, BackendError::Wkt(err.to_string())))?;
        let params = ProjParams::parse(&proj_string);
        let proj = Proj::from_proj_string(&proj_string)
            .map_err(|err| UcrsError::malformed(wkt, err.into()))?;
        let code =
            registry::code_from_wkt(wkt).filter(|code| registry::resolve_code(*code).is_ok());
        Ok(Self {
            code,
            params,
            wkt: Some(wkt.to_string()),
            proj,
        })
    }

    /// Validates a parameter map against the primary backend.
    pub fn from_params(params: ProjParams) -> Result<Self, UcrsError> {
        if params.is_empty() {
            return Err(UcrsError::invalid("proj string has no parameters"));
        }
        let proj_string = params.to_proj_string();
        let proj = Proj::from_proj_string(&proj_string)
            .map_err(|err| UcrsError::malformed(&proj_string, err.into()))?;
        Ok(Self {
            code: None,
            params,
            wkt: None,
            proj,
        })
    }

    /// The EPSG registry code, when one is known.
    pub fn code(&self) -> Option<u32> {
        self.code
    }

    /// The normalized parameter map.
    pub fn params(&self) -> &ProjParams {
        &self.params
    }

    /// The WKT text, when one is known (input-supplied or from the
    /// registry). Local/custom CRSs built from parameters have none.
    pub fn wkt(&self) -> Option<&str> {
        self.wkt.as_deref()
    }

    /// The validated primary-backend object.
    pub fn proj(&self) -> &Proj {
        &self.proj
    }

    pub fn kind(&self) -> CrsKind {
        self.params.kind()
    }

    /// The normalized canonical proj string.
    pub fn to_proj_string(&self) -> String {
        self.params.to_proj_string()
    }
}

/// Canonical equality: registry codes when both are known, normalized
/// parameters otherwise. Cached derived views are never consulted.
impl PartialEq for CanonicalCrs {
    fn eq(&self, other: &Self) -> bool {
        match (self.code, other.code) {
            (Some(a), Some(b)) => a == b,
            _ => self.params == other.params,
        }
    }
}

impl std::fmt::Debug for CanonicalCrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanonicalCrs")
            .field("code", &self.code)
            .field("params", &self.params)
            .field("wkt", &self.wkt.as_deref().map(|w| w.len()))
            .finish_non_exhaustive()
    }
}
