//! The unified CRS adapter type.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::backends::gdal::GdalCrs;
use crate::backends::proj::ProjCrs;
use crate::backends::{Availability, Backend};
use crate::crs::{CanonicalCrs, CrsInput, CrsKind};
use crate::error::UcrsError;

/// Display width before the proj string is truncated.
const DISPLAY_LIMIT: usize = 60;

/// A unified coordinate reference system.
///
/// `Ucrs` normalizes any supported input into one canonical representation
/// and exposes lazily-cached conversions to each backend's native object.
/// The canonical form is immutable for the life of the instance; a derived
/// view, once cached, is never invalidated.
///
/// # Example
///
/// ```
/// use ucrs::Ucrs;
///
/// let wgs84 = Ucrs::new(4326)?;
/// assert!(wgs84.is_geographic());
/// assert_eq!(wgs84.epsg(), Some(4326));
/// assert_eq!(wgs84, Ucrs::new("EPSG:4326")?);
/// # Ok::<(), ucrs::UcrsError>(())
/// ```
pub struct Ucrs {
    canonical: CanonicalCrs,
    availability: Availability,
    views: DerivedViews,
}

/// Per-backend derived-view cache, populated on first access.
#[derive(Default)]
struct DerivedViews {
    proj: OnceLock<ProjCrs>,
    gdal: OnceLock<GdalCrs>,
}

impl Ucrs {
    /// Constructs an adapter from any supported input variant.
    ///
    /// Either fully constructs or fails with a typed error; there is no
    /// partial state. Optional-backend availability is detected from the
    /// compiled feature set.
    pub fn new(input: impl Into<CrsInput>) -> Result<Self, UcrsError> {
        Self::with_availability(input, Availability::detected())
    }

    /// Constructs an adapter with injected backend availability.
    ///
    /// Availability can only be narrower than the compiled feature set;
    /// this is the hook tests use to exercise missing-dependency paths.
    pub fn with_availability(
        input: impl Into<CrsInput>,
        availability: Availability,
    ) -> Result<Self, UcrsError> {
        let canonical = CanonicalCrs::from_input(input.into())?;
        Ok(Self {
            canonical,
            availability,
            views: DerivedViews::default(),
        })
    }

    /// The canonical representation.
    pub fn canonical(&self) -> &CanonicalCrs {
        &self.canonical
    }

    /// The backend availability this adapter operates under. Narrower than
    /// the compiled feature set when it was injected at construction.
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// The primary-backend view. Always available; this is the canonical
    /// representation itself, so there is no conversion cost.
    pub fn to_proj4rs(&self) -> &proj4rs::Proj {
        self.canonical.proj()
    }

    /// The proj-backend view, built on first access and cached.
    ///
    /// Availability is checked only on a cache miss; a cached view is
    /// returned unconditionally. Concurrent first accesses may build
    /// redundantly, but the first stored value wins and is the one every
    /// caller sees afterwards.
    pub fn to_proj(&self) -> Result<&ProjCrs, UcrsError> {
        if let Some(view) = self.views.proj.get() {
            return Ok(view);
        }
        if !self.availability.has(Backend::Proj) {
            return Err(UcrsError::missing(Backend::Proj));
        }
        self.build_proj_view()
    }

    /// The gdal-backend view, built on first access and cached. Same
    /// availability and race rules as [`Ucrs::to_proj`].
    pub fn to_gdal(&self) -> Result<&GdalCrs, UcrsError> {
        if let Some(view) = self.views.gdal.get() {
            return Ok(view);
        }
        if !self.availability.has(Backend::Gdal) {
            return Err(UcrsError::missing(Backend::Gdal));
        }
        self.build_gdal_view()
    }

    #[cfg(feature = "backend-proj")]
    fn build_proj_view(&self) -> Result<&ProjCrs, UcrsError> {
        let built = crate::backends::proj::build(&self.canonical)?;
        Ok(self.views.proj.get_or_init(move || built))
    }

    #[cfg(not(feature = "backend-proj"))]
    fn build_proj_view(&self) -> Result<&ProjCrs, UcrsError> {
        // Availability is clamped to the compiled features, so a miss
        // without the feature always reports the dependency.
        Err(UcrsError::missing(Backend::Proj))
    }

    #[cfg(feature = "backend-gdal")]
    fn build_gdal_view(&self) -> Result<&GdalCrs, UcrsError> {
        let built = crate::backends::gdal::build(&self.canonical)?;
        Ok(self.views.gdal.get_or_init(move || built))
    }

    #[cfg(not(feature = "backend-gdal"))]
    fn build_gdal_view(&self) -> Result<&GdalCrs, UcrsError> {
        Err(UcrsError::missing(Backend::Gdal))
    }

    /// The EPSG registry code, when one is known. Local/custom CRSs have
    /// none and are still fully functional.
    pub fn epsg(&self) -> Option<u32> {
        self.canonical.code()
    }

    pub fn kind(&self) -> CrsKind {
        self.canonical.kind()
    }

    pub fn is_geographic(&self) -> bool {
        self.canonical.kind() == CrsKind::Geographic
    }

    pub fn is_projected(&self) -> bool {
        self.canonical.kind() == CrsKind::Projected
    }

    /// The projection name (`proj` parameter) of the canonical form.
    pub fn proj_name(&self) -> Option<&str> {
        self.canonical.params().proj_name()
    }

    /// The full normalized proj string.
    pub fn to_proj_string(&self) -> String {
        self.canonical.to_proj_string()
    }

    /// The WKT text, when one is known.
    pub fn wkt(&self) -> Option<&str> {
        self.canonical.wkt()
    }

    /// The identifying definition: `EPSG:n` when the code is known, the
    /// full proj string otherwise. This is also the serialized form.
    pub fn definition(&self) -> String {
        match self.epsg() {
            Some(code) => format!("EPSG:{code}"),
            None => self.to_proj_string(),
        }
    }
}

/// Adapter equality is canonical equality, never cached-view comparison.
impl PartialEq for Ucrs {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

/// Identifies the CRS without dumping the full canonical text: the
/// registry code when known, otherwise the truncated proj string.
impl fmt::Display for Ucrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.epsg() {
            Some(code) => write!(f, "EPSG:{code}"),
            None => {
                let proj_string = self.to_proj_string();
                if proj_string.chars().count() <= DISPLAY_LIMIT {
                    write!(f, "{proj_string}")
                } else {
                    let head: String = proj_string.chars().take(DISPLAY_LIMIT).collect();
                    write!(f, "{head}…")
                }
            }
        }
    }
}

impl fmt::Debug for Ucrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ucrs({self})")
    }
}

impl Serialize for Ucrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.definition())
    }
}

impl<'de> Deserialize<'de> for Ucrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = CrsInput::deserialize(deserializer)?;
        Ucrs::new(input).map_err(serde::de::Error::custom)
    }
}

/// Consuming an adapter yields its canonical representation, which can be
/// fed back into [`Ucrs::new`] without conversion.
impl From<Ucrs> for CrsInput {
    fn from(value: Ucrs) -> Self {
        CrsInput::Canonical(value.canonical)
    }
}
