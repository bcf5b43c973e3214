//! Text shaping backed by Parley.

/// [`parley_layout::ParleyLayout`] and its relayout rules.
pub mod parley_layout;
