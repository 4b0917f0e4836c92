//! Backend identifiers and availability flags.
//!
//! The primary backend (`proj4rs`) is always compiled in. The optional
//! backends wrap native libraries and are gated behind cargo features, so
//! "is this backend installed" is resolved once from the compiled feature
//! set. Tests can inject a narrower [`Availability`] to exercise the
//! missing-dependency paths without changing the build.

pub mod gdal;
pub mod proj;

use serde::Serialize;
use std::fmt;

/// One of the CRS libraries this crate can produce native objects for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The pure-Rust primary backend. Always available.
    Proj4rs,
    /// Bindings to the C PROJ library (`proj` crate).
    Proj,
    /// Bindings to GDAL's `SpatialRef` (`gdal` crate).
    Gdal,
}

impl Backend {
    /// The cargo feature that enables this backend, if it is optional.
    pub fn feature(&self) -> Option<&'static str> {
        match self {
            Backend::Proj4rs => None,
            Backend::Proj => Some("backend-proj"),
            Backend::Gdal => Some("backend-gdal"),
        }
    }

    /// Human-readable instruction for making this backend available.
    pub fn install_hint(&self) -> String {
        match self {
            Backend::Proj4rs => "it is built into ucrs".to_string(),
            Backend::Proj => {
                "enable the `backend-proj` cargo feature of ucrs \
                 (builds the `proj` crate, which needs the PROJ system library)"
                    .to_string()
            }
            Backend::Gdal => {
                "enable the `backend-gdal` cargo feature of ucrs \
                 (builds the `gdal` crate, which needs the GDAL system library)"
                    .to_string()
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Proj4rs => "proj4rs",
            Backend::Proj => "proj",
            Backend::Gdal => "gdal",
        };
        write!(f, "{name}")
    }
}

/// Read-only optional-backend flags, resolved once per adapter.
///
/// [`Availability::detected`] reflects the compiled feature set. The
/// `without_*` builders can only narrow it, so an `Availability` never
/// claims a backend the build does not carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Availability {
    proj: bool,
    gdal: bool,
}

impl Availability {
    /// The availability of the current build.
    pub fn detected() -> Self {
        Self {
            proj: cfg!(feature = "backend-proj"),
            gdal: cfg!(feature = "backend-gdal"),
        }
    }

    /// Marks the proj backend unavailable (for tests).
    pub fn without_proj(mut self) -> Self {
        self.proj = false;
        self
    }

    /// Marks the gdal backend unavailable (for tests).
    pub fn without_gdal(mut self) -> Self {
        self.gdal = false;
        self
    }

    pub fn has(&self, backend: Backend) -> bool {
        match backend {
            Backend::Proj4rs => true,
            Backend::Proj => self.proj,
            Backend::Gdal => self.gdal,
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::detected()
    }
}
