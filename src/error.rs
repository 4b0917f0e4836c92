use thiserror::Error;

use crate::backends::Backend;

/// Maximum number of characters of offending input echoed in error messages.
const INPUT_ECHO_LIMIT: usize = 80;

/// The main error type for ucrs operations.
#[derive(Debug, Error)]
pub enum UcrsError {
    /// The input named no supported variant at all (empty string, empty
    /// parameter map, missing CLI argument).
    #[error("invalid CRS input: {reason}")]
    InvalidInput { reason: String },

    /// A recognized input variant that the backend rejected.
    #[error("malformed CRS '{input}': {source}")]
    MalformedCrs {
        /// The offending input, truncated for display.
        input: String,
        #[source]
        source: BackendError,
    },

    /// An optional-backend conversion was requested but the backend is not
    /// available in this build.
    #[error("the {backend} backend is not available; {}", .backend.install_hint())]
    MissingDependency { backend: Backend },

    #[error("CRS has no EPSG registry code")]
    NoRegistryCode,

    #[error("no WKT representation is available for this CRS")]
    NoWkt,

    #[error("unsupported conversion target: {0} (supported: proj4, wkt, epsg)")]
    UnsupportedTarget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl UcrsError {
    /// Builds an [`UcrsError::InvalidInput`] with the given reason.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        UcrsError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Builds an [`UcrsError::MalformedCrs`], truncating the echoed input.
    pub(crate) fn malformed(input: &str, source: BackendError) -> Self {
        UcrsError::MalformedCrs {
            input: truncate_input(input),
            source,
        }
    }

    pub(crate) fn missing(backend: Backend) -> Self {
        UcrsError::MissingDependency { backend }
    }
}

/// Errors produced by the underlying CRS backends while resolving an input.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The code is not present in the bundled EPSG registry.
    #[error("code {0} is not in the EPSG registry")]
    UnknownCode(u32),

    /// An authority-prefixed code named an authority other than EPSG.
    #[error("unknown CRS authority '{0}' (only EPSG codes are supported)")]
    UnknownAuthority(String),

    /// An authority-prefixed code whose code part is not numeric.
    #[error("authority code '{0}' is not numeric")]
    InvalidAuthorityCode(String),

    /// Free text that matches none of the supported representations.
    #[error("text is not an EPSG code, WKT, or proj string")]
    UnrecognizedText,

    /// The primary backend rejected a proj string.
    #[error("proj string rejected: {0}")]
    ProjString(#[from] proj4rs::errors::Error),

    /// The WKT importer rejected a WKT document. The importer's error
    /// type is not exported, so only its message can be carried.
    #[error("WKT rejected: {0}")]
    Wkt(String),

    /// The proj backend rejected a definition.
    #[cfg(feature = "backend-proj")]
    #[error("proj backend error: {0}")]
    Proj(String),

    /// The gdal backend rejected a definition.
    #[cfg(feature = "backend-gdal")]
    #[error("gdal backend error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),
}

/// Truncates offending input for error display without splitting a char.
fn truncate_input(input: &str) -> String {
    if input.chars().count() <= INPUT_ECHO_LIMIT {
        return input.to_string();
    }
    let head: String = input.chars().take(INPUT_ECHO_LIMIT).collect();
    format!("{head}…")
}
