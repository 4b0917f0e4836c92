//! Describe report types and terminal formatting.

use std::fmt;

use serde::Serialize;

use crate::backends::Backend;
use crate::crs::CrsKind;

/// The result of describing a CRS.
#[derive(Clone, Debug, Serialize)]
pub struct DescribeReport {
    /// Identifying line: `EPSG:n` or the truncated definition.
    pub identity: String,
    /// The EPSG registry code, when known.
    pub epsg: Option<u32>,
    /// Geographic / projected / geocentric.
    pub kind: CrsKind,
    /// The full normalized proj string.
    pub proj_string: String,
    /// Whether a WKT representation is known.
    pub has_wkt: bool,
    /// The WKT text, included only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkt: Option<String>,
    /// Per-backend availability in this build.
    pub backends: Vec<BackendStatus>,
}

/// Availability of one backend.
#[derive(Clone, Debug, Serialize)]
pub struct BackendStatus {
    pub backend: Backend,
    pub available: bool,
}

impl fmt::Display for DescribeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌─ CRS ──────────────────────────────────────────────")?;
        writeln!(f, "│ Identity:  {}", self.identity)?;
        match self.epsg {
            Some(code) => writeln!(f, "│ EPSG:      {code}")?,
            None => writeln!(f, "│ EPSG:      (none, local/custom CRS)")?,
        }
        writeln!(f, "│ Kind:      {}", self.kind)?;
        writeln!(f, "│ Proj:      {}", self.proj_string)?;
        writeln!(
            f,
            "│ WKT:       {}",
            if self.has_wkt { "available" } else { "none" }
        )?;
        write!(f, "│ Backends: ")?;
        for status in &self.backends {
            let mark = if status.available { "✓" } else { "✗" };
            write!(f, " {}{mark}", status.backend)?;
        }
        writeln!(f)?;
        writeln!(f, "└────────────────────────────────────────────────────")?;
        if let Some(wkt) = &self.wkt {
            writeln!(f)?;
            writeln!(f, "{wkt}")?;
        }
        Ok(())
    }
}
