//! glyphfx animates laid-out text by rewriting glyph quad vertices and colors every frame.
//!
//! A host supplies undeformed glyph geometry through [`GlyphLayout`] and receives the
//! animated mesh through [`RenderSink`]. Between the two, [`FrameDriver`]:
//!
//! - re-captures the baseline geometry from the layout
//! - sums per-glyph offsets, then deforms each quad about its midpoint
//! - folds color effects left to right
//! - sets the whole-text scale/rotation transform
//!
//! Effects are configured with an [`EffectSet`], which round-trips through JSON.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod effects;
/// Glyph quads and baseline snapshots.
pub mod glyph;
pub mod host;
pub mod pipeline;
pub mod render;
pub mod text;
/// Shared time anchor and text-change tracking.
pub mod time;

pub use crate::foundation::core::{
    Affine, BezPath, Fps, Point, Rect, Rgba, Rgba8, Transform2D, Vec2,
};
pub use crate::foundation::error::{GlyphFxError, GlyphFxResult};

pub use crate::effects::config::{
    BlinkParams, BounceParams, ColorLerpParams, Effect, EffectEntry, EffectKind, EffectSet,
    EffectStage, EffectUnit, EntranceParams, FadeParams, FlickerParams, FlipParams, GlowParams,
    PulseMode, PulseParams, RainbowParams, RotateParams, ShakeParams, ShineDirection,
    ShineParams, SpiralParams, SquishParams, StretchParams, WaveParams,
};
pub use crate::glyph::quad::{Glyph, GlyphQuad, QUAD_VERTS};
pub use crate::glyph::snapshot::{BaselineSnapshot, SnapshotCache, SubmeshBuffers};
pub use crate::host::layout::{GlyphLayout, StaticLayout};
pub use crate::host::mesh::{MeshBuffers, RenderSink};
pub use crate::pipeline::driver::{
    FrameDriver, FrameOutcome, FrameResult, FrameStats, SkipReason,
};
pub use crate::render::cpu::{FrameRgba, RasterOpts, rasterize_mesh, write_png};
pub use crate::text::parley_layout::ParleyLayout;
pub use crate::time::anchor::TimeAnchor;
