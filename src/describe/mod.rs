//! CRS description reports.
//!
//! This module turns an adapter instance into a structured report for the
//! CLI: identity, kind, normalized definition, and which backends this
//! build can convert to.

mod report;

pub use report::{BackendStatus, DescribeReport};

use crate::backends::Backend;
use crate::Ucrs;

/// Options for describing a CRS.
#[derive(Clone, Debug, Default)]
pub struct DescribeOptions {
    /// Include the full WKT text in the report when one is known.
    pub include_wkt: bool,
}

/// Describe a CRS and produce a structured report.
///
/// Backend status reflects the adapter's own availability, so an adapter
/// constructed with a narrowed set reports exactly what it can convert to.
pub fn describe(crs: &Ucrs, opts: &DescribeOptions) -> DescribeReport {
    let availability = crs.availability();
    let backends = [Backend::Proj4rs, Backend::Proj, Backend::Gdal]
        .into_iter()
        .map(|backend| BackendStatus {
            backend,
            available: availability.has(backend),
        })
        .collect();

    DescribeReport {
        identity: crs.to_string(),
        epsg: crs.epsg(),
        kind: crs.kind(),
        proj_string: crs.to_proj_string(),
        has_wkt: crs.wkt().is_some(),
        wkt: if opts.include_wkt {
            crs.wkt().map(str::to_string)
        } else {
            None
        },
        backends,
    }
}
