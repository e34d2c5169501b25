//! Persona data model
//!
//! A persona is a set of label selections over a fixed list of [`Field`]s plus
//! fourteen numeric [`Dimension`]s. The [`Profile`] type enforces the
//! selection invariants (at most one label for single-select fields, no
//! duplicates for multi-select fields, dimensions within [0, 100]).

pub mod dimension;
pub mod field;
pub mod profile;
pub mod tone;

pub use dimension::{Dimension, DimensionGroup};
pub use field::{Category, Field, FieldKind};
pub use profile::{Profile, ProfileError};
