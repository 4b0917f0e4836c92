//! Normalized proj-string parameter maps.
//!
//! Every canonical CRS carries its definition as an ordered parameter map
//! so that two definitions can be compared independently of token order
//! and `+` prefixes. Parsing is deliberately permissive: the primary
//! backend is the authority on whether a parameter set describes a real
//! CRS, this type only normalizes the text.

use std::collections::BTreeMap;
use std::fmt;

/// Flag values accepted when building params from a key/value mapping.
const FLAG_VALUES: [&str; 4] = ["", "true", "True", "yes"];

/// An ordered, normalized proj-string parameter map.
///
/// Keys are stored without the `+` prefix. A parameter may carry a value
/// (`+proj=utm`) or be a bare flag (`+no_defs`). Duplicate keys keep the
/// last occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ProjParams {
    entries: BTreeMap<String, Option<String>>,
}

impl ProjParams {
    /// Parses a proj string such as `+proj=longlat +datum=WGS84 +no_defs`.
    ///
    /// Tokens may omit the leading `+` (PROJ itself reports definitions
    /// without it). Empty tokens are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();
        for token in text.split_whitespace() {
            let token = token.trim_start_matches('+');
            if token.is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    entries.insert(key.to_string(), Some(value.to_string()));
                }
                Some(_) => {}
                None => {
                    entries.insert(token.to_string(), None);
                }
            }
        }
        Self { entries }
    }

    /// Builds params from a key/value mapping (the dictionary input
    /// variant). Values that read as booleans become bare flags.
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let key = key.trim_start_matches('+');
            if key.is_empty() {
                continue;
            }
            if FLAG_VALUES.contains(&value.as_str()) {
                entries.insert(key.to_string(), None);
            } else {
                entries.insert(key.to_string(), Some(value.clone()));
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up a parameter value. Bare flags return `None` like missing
    /// keys do; use [`ProjParams::contains`] to distinguish them.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The projection name (the `proj` parameter), if present.
    pub fn proj_name(&self) -> Option<&str> {
        self.get("proj")
    }

    /// Classifies the CRS by its projection name.
    pub fn kind(&self) -> CrsKind {
        match self.proj_name() {
            Some("longlat") | Some("latlong") | Some("latlon") | Some("lonlat") => {
                CrsKind::Geographic
            }
            Some("geocent") | Some("cart") => CrsKind::Geocentric,
            _ => CrsKind::Projected,
        }
    }

    /// Renders the deterministic normalized proj string: `+proj` first,
    /// remaining parameters in sorted key order.
    pub fn to_proj_string(&self) -> String {
        let mut out = String::new();
        if let Some(name) = self.proj_name() {
            out.push_str("+proj=");
            out.push_str(name);
        }
        for (key, value) in &self.entries {
            if key == "proj" {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push('+');
            out.push_str(key);
            if let Some(value) = value {
                out.push('=');
                out.push_str(value);
            }
        }
        out
    }
}

impl fmt::Display for ProjParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_proj_string())
    }
}

/// Coarse CRS classification derived from the projection name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrsKind {
    Geographic,
    Projected,
    Geocentric,
}

impl fmt::Display for CrsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrsKind::Geographic => "geographic",
            CrsKind::Projected => "projected",
            CrsKind::Geocentric => "geocentric",
        };
        write!(f, "{name}")
    }
}
