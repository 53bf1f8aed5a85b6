//! Path values and path normalization.
//!
//! # Key Concepts
//!
//! ## Path values
//!
//! [`VariablePath`] is a segmented path with an optional device token. It is
//! the currency of the whole crate: resolvers store and return them, and the
//! relativizer produces them. Its first segment may be a variable reference
//! (`PROJECT_LOC`, `${PROJECT_LOC}`, `PARENT-1-SRC`).
//!
//! ## Normalization
//!
//! User input is normalized to an absolute `VariablePath` by expanding `~`,
//! joining relative input onto the current directory and resolving `..`.
//!
//! ## Case
//!
//! Matching variables against paths respects [`CaseSensitivity`]. On a
//! case-insensitive setting both sides are lower-cased before comparison,
//! while results keep the caller's original spelling.
//!
//! # Examples
//!
//! ```
//! use pathvars::path::{CaseSensitivity, VariablePath};
//!
//! let value = VariablePath::from_portable_string("/Work");
//! let target = VariablePath::from_portable_string("/work/src");
//!
//! let case = CaseSensitivity::Insensitive;
//! assert!(case.to_proper_case(&value).is_prefix_of(&case.to_proper_case(&target)));
//! assert!(!value.is_prefix_of(&target));
//! ```

pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use normalize::CaseSensitivity;
pub use types::{VariablePath, DEVICE_SEPARATOR, PORTABLE_SEPARATOR};
