//! Graph building core - normalization, dependency resolution and grouping
//!
//! Pure domain logic with no I/O. Input is a batch of raw descriptors,
//! output is an immutable [`domain::GraphView`].
pub mod domain;
pub mod services;
