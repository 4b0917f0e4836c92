//! Primary-backend access, cache stability, and cross-input consistency.

mod common;

use common::{wgs84, wgs84_params, wgs84_wkt, EPSG_4326};
use ucrs::crs::registry;
use ucrs::Ucrs;

#[test]
fn primary_view_is_always_available() {
    let crs = wgs84();
    let proj = crs.to_proj4rs();
    // The primary view is the canonical object itself.
    assert!(std::ptr::eq(proj, crs.canonical().proj()));
}

#[test]
fn primary_view_is_stable_across_calls() {
    let crs = wgs84();
    assert!(std::ptr::eq(crs.to_proj4rs(), crs.to_proj4rs()));
}

#[test]
fn proj_string_matches_registry_definition() {
    use ucrs::ProjParams;

    for code in [4326u32, 3857, 32633, 2154, 32760] {
        let crs = Ucrs::new(code).unwrap();
        let registry_params = ProjParams::parse(registry::resolve_code(code).unwrap().proj4);
        assert_eq!(
            crs.to_proj_string(),
            registry_params.to_proj_string(),
            "code {code}"
        );
    }
}

#[test]
fn same_crs_from_different_inputs_is_equal() {
    let from_code = Ucrs::new(EPSG_4326).unwrap();
    let from_string = Ucrs::new("EPSG:4326").unwrap();
    let from_wkt = Ucrs::new(wgs84_wkt()).unwrap();
    let from_params = Ucrs::new(wgs84_params()).unwrap();

    assert_eq!(from_code, from_string);
    assert_eq!(from_code, from_wkt);
    // The params input has no registry code; equality falls back to the
    // normalized parameter comparison.
    assert_eq!(from_code, from_params);
}

#[test]
fn different_crs_are_not_equal() {
    let wgs84 = Ucrs::new(4326u32).unwrap();
    let mercator = Ucrs::new(3857u32).unwrap();
    assert_ne!(wgs84, mercator);
}

#[test]
fn equality_ignores_cached_views() {
    // Two instances of the same CRS stay equal regardless of which
    // conversions have been requested on either of them.
    let a = wgs84();
    let b = wgs84();
    let _ = a.to_proj4rs();
    let _ = a.to_gdal(); // may fail without the backend, irrelevant here
    assert_eq!(a, b);
}

#[test]
fn instances_are_independent() {
    let a = Ucrs::new(4326u32).unwrap();
    let b = Ucrs::new(3857u32).unwrap();
    assert_eq!(a.epsg(), Some(4326));
    assert_eq!(b.epsg(), Some(3857));
    assert!(!std::ptr::eq(a.to_proj4rs(), b.to_proj4rs()));
}

#[test]
fn definition_identifies_the_crs() {
    assert_eq!(wgs84().definition(), "EPSG:4326");
    let custom = Ucrs::new("+proj=utm +zone=33 +datum=WGS84").unwrap();
    assert!(custom.definition().starts_with("+proj=utm"));
}
