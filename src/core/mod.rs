//! Core types - pure abstractions shared across the crate.

mod fragment;

pub use fragment::HashFragment;
