//! Per-frame evaluation: offsets and deformations, color fold, whole-text transform,
//! and the driver that sequences them against the collaborators.

/// Vertex stage.
pub mod accumulate;
/// Color stage.
pub mod composite;
/// Frame driver.
pub mod driver;
/// Whole-text stage.
pub mod whole_text;
