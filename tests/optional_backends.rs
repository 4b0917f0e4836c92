//! Optional backend availability, missing-dependency errors, and caching.
//!
//! Like the backends themselves, these tests come in two halves: the
//! `cfg(not(feature))` tests cover default builds where the conversion
//! must fail with an actionable error, and the `cfg(feature)` tests cover
//! builds that carry the native library.

mod common;

use common::wgs84;
use ucrs::{Availability, Ucrs, UcrsError};

// Without the proj backend compiled in

#[cfg(not(feature = "backend-proj"))]
mod proj_missing {
    use super::*;

    #[test]
    fn to_proj_fails_with_missing_dependency() {
        let crs = wgs84();
        let err = crs.to_proj().unwrap_err();
        assert!(matches!(err, UcrsError::MissingDependency { .. }));
    }

    #[test]
    fn error_message_names_backend_and_feature() {
        let err = wgs84().to_proj().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("proj"));
        assert!(msg.contains("backend-proj"));
    }

    #[test]
    fn primary_still_works_without_proj() {
        let crs = wgs84();
        let _ = crs.to_proj4rs();
        assert_eq!(crs.epsg(), Some(4326));
    }
}

// Without the gdal backend compiled in

#[cfg(not(feature = "backend-gdal"))]
mod gdal_missing {
    use super::*;

    #[test]
    fn to_gdal_fails_with_missing_dependency() {
        let crs = wgs84();
        let err = crs.to_gdal().unwrap_err();
        assert!(matches!(err, UcrsError::MissingDependency { .. }));
    }

    #[test]
    fn error_message_names_backend_and_feature() {
        let err = wgs84().to_gdal().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("gdal"));
        assert!(msg.contains("backend-gdal"));
    }

    #[test]
    fn repeated_misses_keep_failing() {
        // Availability is checked on every miss; nothing gets cached.
        let crs = wgs84();
        assert!(crs.to_gdal().is_err());
        assert!(crs.to_gdal().is_err());
        let _ = crs.to_proj4rs();
    }
}

// Injected availability works regardless of the compiled features: it can
// only narrow, so these hold in every build.

#[test]
fn injected_unavailability_disables_proj() {
    let avail = Availability::detected().without_proj();
    let crs = Ucrs::with_availability(4326u32, avail).unwrap();
    assert!(matches!(
        crs.to_proj(),
        Err(UcrsError::MissingDependency { .. })
    ));
    assert_eq!(crs.epsg(), Some(4326));
}

#[test]
fn injected_unavailability_disables_gdal() {
    let avail = Availability::detected().without_gdal();
    let crs = Ucrs::with_availability(4326u32, avail).unwrap();
    assert!(matches!(
        crs.to_gdal(),
        Err(UcrsError::MissingDependency { .. })
    ));
}

// With the proj backend compiled in

#[cfg(feature = "backend-proj")]
mod proj_present {
    use super::*;

    #[test]
    fn to_proj_builds_native_object() {
        let crs = wgs84();
        assert!(crs.to_proj().is_ok());
    }

    #[test]
    fn to_proj_is_cached() {
        let crs = wgs84();
        let first = crs.to_proj().unwrap();
        let second = crs.to_proj().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn availability_checked_only_on_first_miss() {
        // A view cached while available stays served even though the
        // availability flag can never change on a live instance.
        let crs = wgs84();
        let first = crs.to_proj().unwrap();
        assert!(std::ptr::eq(first, crs.to_proj().unwrap()));
    }

    #[test]
    fn concurrent_first_access_yields_one_cached_view() {
        // Racing threads may each build a candidate, but the first value
        // stored wins and every caller ends up with the same reference.
        let crs = wgs84();
        let views: Vec<&proj::Proj> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| crs.to_proj().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        let first = views[0];
        assert!(views.iter().all(|view| std::ptr::eq(first, *view)));
    }

    #[test]
    fn from_proj_object_roundtrip() {
        let crs = wgs84();
        let native = proj::Proj::new("EPSG:4326").unwrap();
        let back = Ucrs::new(native).unwrap();
        // Conversion happens at construction; equality is canonical.
        assert_eq!(back.to_proj_string(), crs.to_proj_string());
    }
}

// With the gdal backend compiled in

#[cfg(feature = "backend-gdal")]
mod gdal_present {
    use super::*;
    use gdal::spatial_ref::SpatialRef;

    #[test]
    fn to_gdal_builds_native_object() {
        let crs = wgs84();
        let srs = crs.to_gdal().unwrap();
        assert_eq!(srs.auth_code().unwrap(), 4326);
    }

    #[test]
    fn to_gdal_is_cached() {
        let crs = wgs84();
        let first = crs.to_gdal().unwrap();
        let second = crs.to_gdal().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn from_gdal_object_preserves_code() {
        let srs = SpatialRef::from_epsg(3857).unwrap();
        let crs = Ucrs::new(srs).unwrap();
        assert_eq!(crs.epsg(), Some(3857));
        assert_eq!(crs, Ucrs::new(3857u32).unwrap());
    }

    #[test]
    fn gdal_roundtrip_is_equal_under_canonical_equality() {
        let original = wgs84();
        let srs = original.to_gdal().unwrap();
        let back = Ucrs::new(srs.clone()).unwrap();
        assert_eq!(back, original);
    }
}
