#![allow(dead_code)]

use std::collections::BTreeMap;

use ucrs::crs::registry;
use ucrs::Ucrs;

/// EPSG code for WGS84 (geographic).
pub const EPSG_4326: u32 = 4326;

/// EPSG code for Web Mercator (projected).
pub const EPSG_3857: u32 = 3857;

/// A projected CRS with no registry code.
pub const CUSTOM_TMERC: &str =
    "+proj=tmerc +lat_0=0 +lon_0=15 +k=0.9996 +x_0=500000 +y_0=0 +datum=WGS84 +units=m +no_defs";

/// A WKT document without a CRS-level authority node.
pub const CUSTOM_WKT: &str = concat!(
    "PROJCS[\"Custom\",GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",",
    "SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],",
    "UNIT[\"degree\",0.0174532925199433]],",
    "PROJECTION[\"Transverse_Mercator\"],",
    "PARAMETER[\"latitude_of_origin\",0],PARAMETER[\"central_meridian\",15],",
    "PARAMETER[\"scale_factor\",0.9996],PARAMETER[\"false_easting\",500000],",
    "PARAMETER[\"false_northing\",0],UNIT[\"metre\",1]]"
);

/// WGS84 as registry WKT.
pub fn wgs84_wkt() -> &'static str {
    registry::resolve_code(EPSG_4326).expect("4326 in registry").wkt
}

/// PROJ dictionary for WGS84.
pub fn wgs84_params() -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert("proj".to_string(), "longlat".to_string());
    map.insert("datum".to_string(), "WGS84".to_string());
    map.insert("no_defs".to_string(), "True".to_string());
    map
}

/// WGS84 as a constructed adapter.
pub fn wgs84() -> Ucrs {
    Ucrs::new(EPSG_4326).expect("EPSG:4326 constructs")
}
