//! Hash collections used across the workspace.
//!
//! FxHash is faster than SipHash for the short string ids this system
//! traffics in, and no untrusted input reaches these maps.

pub use rustc_hash::{FxHashMap, FxHashSet};
