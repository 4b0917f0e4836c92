//! Canonical CRS representation for ucrs.
//!
//! This module defines the canonical, backend-agnostic representation of
//! a coordinate reference system. It serves as the central "hub" that all
//! backend conversions pass through: every input variant is normalized to
//! one [`CanonicalCrs`] at construction, and every backend view is derived
//! from it.
//!
//! # Design Principles
//!
//! 1. **One dispatch**: Input variants form a closed union ([`CrsInput`])
//!    resolved exactly once, at construction. No dynamic type probing
//!    afterwards.
//!
//! 2. **Immutable canonical form**: A [`CanonicalCrs`] never changes after
//!    construction, which is what makes the adapter's derived-view caches
//!    safe to keep forever.
//!
//! 3. **Backends are the authority**: This crate normalizes identity and
//!    text. Whether a definition describes a real CRS is decided by the
//!    primary backend at construction.

mod canonical;
mod input;
mod params;
pub mod registry;

// Re-export core types for convenient access
pub use canonical::CanonicalCrs;
pub use input::CrsInput;
pub use params::{CrsKind, ProjParams};
