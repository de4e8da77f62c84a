//! Mask-hole geometry engine.
//!
//! Everything here is pure and total: inputs that cannot produce a valid contour resolve to a
//! fallback path instead of an error.

pub(crate) mod hole;
pub(crate) mod interpolate;
pub(crate) mod morph;
pub(crate) mod path;
pub(crate) mod shape;
