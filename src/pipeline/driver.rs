use crate::{
    effects::config::{Effect, EffectSet, EffectStage},
    foundation::{
        core::{Transform2D, Vec2},
        error::GlyphFxResult,
    },
    glyph::{
        quad::QUAD_VERTS,
        snapshot::{BaselineSnapshot, SnapshotCache, SubmeshBuffers},
    },
    host::{layout::GlyphLayout, mesh::RenderSink},
    pipeline::{
        accumulate::accumulate,
        composite::{ColorSite, composite},
        whole_text::whole_text_transform,
    },
    time::anchor::TimeAnchor,
};

/// Why a frame produced no buffer writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The `animate` switch is off; previous buffers are left as they were.
    Disabled,
    /// The layout reported no visible glyph.
    NoVisibleGlyphs,
}

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameStats {
    /// Seconds since the time anchor.
    pub elapsed: f64,
    /// Glyphs reported by the layout.
    pub glyphs: usize,
    /// Glyphs that were animated.
    pub visible: usize,
    /// Submeshes written and committed.
    pub submeshes: usize,
    /// Enabled effects this frame.
    pub effects: usize,
}

/// Result of one [`FrameDriver::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Buffers were written and committed.
    Rendered(FrameStats),
    /// Nothing was written.
    Skipped(SkipReason),
}

/// Final vertex data for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameResult {
    /// Seconds since the time anchor.
    pub elapsed: f64,
    /// Per-submesh positions and colors.
    pub submeshes: Vec<SubmeshBuffers>,
    /// Whole-text scale/rotation, identity when inactive.
    pub text_transform: Transform2D,
}

impl FrameResult {
    /// Write every submesh, set the text transform, then commit every submesh.
    pub fn write_to(&self, sink: &mut impl RenderSink) -> GlyphFxResult<()> {
        for (i, mesh) in self.submeshes.iter().enumerate() {
            sink.write_vertices(i, &mesh.positions)?;
            sink.write_colors(i, &mesh.colors)?;
        }
        sink.set_text_transform(self.text_transform)?;
        for i in 0..self.submeshes.len() {
            sink.commit(i)?;
        }
        Ok(())
    }
}

/// Enabled effects split by stage, built once per frame.
#[derive(Clone, Debug, Default)]
struct FramePlan {
    offset: Vec<Effect>,
    deform: Vec<Effect>,
    color: Vec<Effect>,
    whole: Vec<Effect>,
}

impl FramePlan {
    fn from_set(set: &EffectSet) -> Self {
        let mut plan = Self::default();
        for effect in set.enabled() {
            let bucket = match effect.stage() {
                EffectStage::Offset => &mut plan.offset,
                EffectStage::Deform => &mut plan.deform,
                EffectStage::Color => &mut plan.color,
                EffectStage::WholeText => &mut plan.whole,
            };
            bucket.push(*effect);
        }
        plan
    }

    fn len(&self) -> usize {
        self.offset.len() + self.deform.len() + self.color.len() + self.whole.len()
    }
}

fn evaluate_frame(
    plan: &FramePlan,
    snapshot: &BaselineSnapshot,
    elapsed: f64,
    rng: &mut fastrand::Rng,
) -> FrameResult {
    let mut submeshes = snapshot.submeshes.clone();

    for g in snapshot.glyphs.iter().filter(|g| g.visible) {
        let quad = accumulate(&g.quad, &plan.offset, &plan.deform, elapsed, g.index, rng);
        let site = ColorSite {
            index: g.index,
            mid: g.quad.midpoint(),
            full_bounds: snapshot.full_bounds,
        };
        let color = composite(g.color.to_rgba(), &plan.color, elapsed, site).to_rgba8();

        let range = g.vertex_index..g.vertex_index + QUAD_VERTS;
        let Some(mesh) = submeshes.get_mut(g.submesh) else {
            tracing::warn!(index = g.index, submesh = g.submesh, "glyph submesh out of range");
            continue;
        };
        let (Some(positions), Some(colors)) = (
            mesh.positions.get_mut(range.clone()),
            mesh.colors.get_mut(range),
        ) else {
            tracing::warn!(index = g.index, vertex = g.vertex_index, "glyph vertices out of range");
            continue;
        };
        positions.copy_from_slice(&quad.corners);
        colors.fill(color);
    }

    FrameResult {
        elapsed,
        submeshes,
        text_transform: whole_text_transform(&plan.whole, elapsed, text_anchor(snapshot)),
    }
}

/// Runs the effect pipeline once per host frame.
///
/// Every frame re-captures the baseline from the layout, so effects never compound.
#[derive(Debug)]
pub struct FrameDriver {
    effects: EffectSet,
    anchor: TimeAnchor,
    cache: SnapshotCache,
    rng: fastrand::Rng,
    animate: bool,
}

impl FrameDriver {
    /// Driver with an unseeded shake source, anchored at `now`.
    pub fn new(effects: EffectSet, now: f64) -> Self {
        Self::with_rng(effects, now, fastrand::Rng::new())
    }

    /// Driver with a deterministic shake source.
    pub fn with_seed(effects: EffectSet, now: f64, seed: u64) -> Self {
        Self::with_rng(effects, now, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(effects: EffectSet, now: f64, rng: fastrand::Rng) -> Self {
        Self {
            effects,
            anchor: TimeAnchor::new(now),
            cache: SnapshotCache::new(),
            rng,
            animate: true,
        }
    }

    /// Current effect configuration.
    pub fn effects(&self) -> &EffectSet {
        &self.effects
    }

    /// Mutable effect configuration; changes apply from the next frame.
    pub fn effects_mut(&mut self) -> &mut EffectSet {
        &mut self.effects
    }

    /// Replace the whole configuration.
    pub fn set_effects(&mut self, effects: EffectSet) {
        self.effects = effects;
    }

    /// Master switch. When off, `tick` does nothing and the last buffers stay on screen.
    pub fn set_animate(&mut self, animate: bool) {
        self.animate = animate;
    }

    /// Whether the pipeline runs.
    pub fn animate(&self) -> bool {
        self.animate
    }

    /// Time anchor shared by every effect.
    pub fn anchor(&self) -> &TimeAnchor {
        &self.anchor
    }

    /// Restart every effect's clock at `now`.
    pub fn reset(&mut self, now: f64) -> f64 {
        self.anchor.reset(now)
    }

    /// Activation hook: record `text` as the master text and reset the clock.
    pub fn activate(&mut self, text: &str, now: f64) -> f64 {
        self.anchor.activate(text, now)
    }

    /// Reset the clock if `text` differs from the master text.
    pub fn observe_text(&mut self, text: &str, now: f64) -> bool {
        self.anchor.observe_text(text, now)
    }

    /// Baseline captured by the last rendered frame.
    pub fn baseline(&self) -> Option<&BaselineSnapshot> {
        self.cache.current()
    }

    /// Evaluate the current configuration against an explicit baseline.
    pub fn evaluate(&mut self, snapshot: &BaselineSnapshot, elapsed: f64) -> FrameResult {
        let plan = FramePlan::from_set(&self.effects);
        evaluate_frame(&plan, snapshot, elapsed, &mut self.rng)
    }

    /// Run one frame: refresh layout, capture the baseline, evaluate, write back.
    #[tracing::instrument(level = "trace", skip(self, layout, sink))]
    pub fn tick(
        &mut self,
        now: f64,
        layout: &mut impl GlyphLayout,
        sink: &mut impl RenderSink,
    ) -> GlyphFxResult<FrameOutcome> {
        if !self.animate {
            return Ok(FrameOutcome::Skipped(SkipReason::Disabled));
        }

        layout.force_relayout()?;
        let Some(snapshot) = self
            .cache
            .capture(layout.visible_glyphs(), layout.full_bounds())
        else {
            tracing::debug!("no visible glyphs, skipping frame");
            return Ok(FrameOutcome::Skipped(SkipReason::NoVisibleGlyphs));
        };

        let elapsed = self.anchor.elapsed(now);
        let plan = FramePlan::from_set(&self.effects);
        let result = evaluate_frame(&plan, snapshot, elapsed, &mut self.rng);
        result.write_to(sink)?;

        let stats = FrameStats {
            elapsed,
            glyphs: snapshot.glyphs.len(),
            visible: snapshot.visible_count(),
            submeshes: result.submeshes.len(),
            effects: plan.len(),
        };
        tracing::trace!(?stats, "frame rendered");
        Ok(FrameOutcome::Rendered(stats))
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(EffectSet::new(), 0.0)
    }
}

/// Pivot used for the whole-text transform of `snapshot`.
pub fn text_anchor(snapshot: &BaselineSnapshot) -> Vec2 {
    snapshot.full_bounds.center().to_vec2()
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/driver.rs"]
mod tests;
