//! Flag composition for the bitflow artifact kinds.
//!
//! [`compose`] is a pure function from a resolved parameter record and an
//! artifact kind to the fully specified [`TargetSpec`] for that kind:
//! ordered compile and link token sequences, the invocation count, and
//! the output path. Identical inputs always yield byte-identical token
//! sequences, so the composed flag strings are safe to use as cache keys.

pub mod compose;
pub mod flags;
pub mod kind;

pub use compose::{compose, TargetSpec};
pub use flags::FlagList;
pub use kind::TargetKind;
