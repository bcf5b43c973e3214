use std::collections::BTreeMap;

use crate::foundation::{
    core::Rgba,
    error::{GlyphFxError, GlyphFxResult},
};

/// Identity of one effect kernel.
///
/// Declaration order is evaluation order within each pipeline stage.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Slide in from an offset with exponential ease-out.
    Entrance,
    /// Vertical sine wave.
    WaveY,
    /// Horizontal sine wave.
    WaveX,
    /// Per-frame random jitter.
    Shake,
    /// Rectified sine hop.
    Bounce,
    /// Circular orbit.
    Spiral,
    /// Vertical mirror through the glyph midline.
    Flip,
    /// Uniform scale oscillation.
    Stretch,
    /// Horizontal-only scale oscillation.
    Squish,
    /// Scale oscillation per glyph or on the whole text.
    Pulse,
    /// Whole-text rotation oscillation.
    Rotate,
    /// Hue cycling.
    Rainbow,
    /// Ping-pong between two colors.
    ColorLerp,
    /// Alpha ping-pong.
    Fade,
    /// Noisy alpha.
    Flicker,
    /// On/off alpha with a duty cycle.
    Blink,
    /// Oscillating blend toward a glow color.
    GlowPulse,
    /// Moving band of highlight color.
    ShineSwipe,
}

impl EffectKind {
    /// Every kind, in evaluation order.
    pub const ALL: [EffectKind; 18] = [
        Self::Entrance,
        Self::WaveY,
        Self::WaveX,
        Self::Shake,
        Self::Bounce,
        Self::Spiral,
        Self::Flip,
        Self::Stretch,
        Self::Squish,
        Self::Pulse,
        Self::Rotate,
        Self::Rainbow,
        Self::ColorLerp,
        Self::Fade,
        Self::Flicker,
        Self::Blink,
        Self::GlowPulse,
        Self::ShineSwipe,
    ];
}

/// Pipeline stage an effect contributes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectStage {
    /// Summed positional offset.
    Offset,
    /// In-place deformation around the glyph midpoint.
    Deform,
    /// Per-glyph color fold.
    Color,
    /// Scale/rotation of the whole text block.
    WholeText,
}

/// Whether an effect's timing is shared by the phrase or staggered per letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectUnit {
    /// Every glyph shares the same phase.
    Phrase,
    /// Phase is offset by glyph index.
    #[default]
    Letter,
}

/// Target of the pulse effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PulseMode {
    /// Scale the whole-text transform.
    #[default]
    WholePhrase,
    /// Scale each glyph about its own midpoint.
    PerLetter,
}

/// Sweep axis of the shine band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShineDirection {
    /// Sweep along X.
    #[default]
    Horizontal,
    /// Sweep along Y.
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Entrance slide parameters.
pub struct EntranceParams {
    /// Stagger per letter or move as one.
    pub unit: EffectUnit,
    /// Starting Y offset.
    pub distance: f64,
    /// Exponential approach rate.
    pub speed: f64,
    /// Per-letter start delay in seconds.
    pub stagger: f64,
}

impl Default for EntranceParams {
    fn default() -> Self {
        Self {
            unit: EffectUnit::Letter,
            distance: 500.0,
            speed: 3.0,
            stagger: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Sine wave parameters shared by `wave_x` and `wave_y`.
pub struct WaveParams {
    /// Angular speed.
    pub speed: f64,
    /// Peak offset.
    pub amplitude: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            speed: 5.0,
            amplitude: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Random jitter parameters.
pub struct ShakeParams {
    /// Maximum offset on each axis.
    pub magnitude: f64,
}

impl Default for ShakeParams {
    fn default() -> Self {
        Self { magnitude: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Bounce parameters.
pub struct BounceParams {
    /// Angular speed.
    pub speed: f64,
    /// Peak hop height.
    pub height: f64,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            speed: 5.0,
            height: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Spiral orbit parameters.
pub struct SpiralParams {
    /// Angular speed.
    pub speed: f64,
    /// Orbit radius.
    pub size: f64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            speed: 2.0,
            size: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Flip parameters.
pub struct FlipParams {
    /// Delay per letter or flip as one.
    pub unit: EffectUnit,
    /// Angular speed.
    pub speed: f64,
    /// Peak vertical scale.
    pub amount: f64,
    /// Per-letter delay in seconds.
    pub delay: f64,
}

impl Default for FlipParams {
    fn default() -> Self {
        Self {
            unit: EffectUnit::Letter,
            speed: 1.0,
            amount: 1.0,
            delay: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Stretch parameters.
pub struct StretchParams {
    /// Angular speed.
    pub speed: f64,
    /// Peak scale factor.
    pub amount: f64,
}

impl Default for StretchParams {
    fn default() -> Self {
        Self {
            speed: 2.0,
            amount: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Squish parameters.
pub struct SquishParams {
    /// Angular speed.
    pub speed: f64,
    /// Horizontal scale at rest.
    pub amount: f64,
}

impl Default for SquishParams {
    fn default() -> Self {
        Self {
            speed: 2.0,
            amount: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Pulse parameters.
pub struct PulseParams {
    /// Whole-text or per-glyph scaling.
    pub mode: PulseMode,
    /// Angular speed.
    pub speed: f64,
    /// Peak scale factor.
    pub scale: f64,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            mode: PulseMode::WholePhrase,
            speed: 2.0,
            scale: 1.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Whole-text rotation parameters.
pub struct RotateParams {
    /// Angular speed of the oscillation.
    pub speed: f64,
    /// Peak angle in degrees.
    pub amount: f64,
}

impl Default for RotateParams {
    fn default() -> Self {
        Self {
            speed: 30.0,
            amount: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Rainbow parameters.
pub struct RainbowParams {
    /// Offset hue per letter or cycle as one.
    pub unit: EffectUnit,
    /// Hue turns per second.
    pub speed: f64,
    /// Hue offset per letter, in turns.
    pub offset: f64,
}

impl Default for RainbowParams {
    fn default() -> Self {
        Self {
            unit: EffectUnit::Letter,
            speed: 1.0,
            offset: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Two-color ping-pong parameters.
pub struct ColorLerpParams {
    /// Color at phase 0.
    pub from: Rgba,
    /// Color at phase 1.
    pub to: Rgba,
    /// Ping-pong rate.
    pub speed: f64,
}

impl Default for ColorLerpParams {
    fn default() -> Self {
        Self {
            from: Rgba::WHITE,
            to: Rgba::RED,
            speed: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Alpha fade parameters.
pub struct FadeParams {
    /// Ping-pong rate.
    pub speed: f64,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Noisy alpha parameters.
pub struct FlickerParams {
    /// Noise traversal rate.
    pub speed: f64,
    /// Alpha at noise 0.
    pub min_alpha: f64,
    /// Alpha at noise 1.
    pub max_alpha: f64,
}

impl Default for FlickerParams {
    fn default() -> Self {
        Self {
            speed: 10.0,
            min_alpha: 0.4,
            max_alpha: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Blink parameters.
pub struct BlinkParams {
    /// Cycles per second.
    pub speed: f64,
    /// Fraction of each cycle that is visible.
    pub duty_cycle: f64,
}

impl Default for BlinkParams {
    fn default() -> Self {
        Self {
            speed: 2.0,
            duty_cycle: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Glow pulse parameters.
pub struct GlowParams {
    /// Target glow color.
    pub color: Rgba,
    /// Peak blend weight in `[0, 1]`.
    pub max: f64,
    /// Angular speed.
    pub speed: f64,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            color: Rgba::CYAN,
            max: 1.0,
            speed: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Shine swipe parameters.
pub struct ShineParams {
    /// Sweep across the phrase bounds or across each glyph.
    pub unit: EffectUnit,
    /// Sweep axis.
    pub direction: ShineDirection,
    /// Highlight color.
    pub color: Rgba,
    /// Peak blend weight in `[0, 1]`.
    pub opacity: f64,
    /// Half-width of the band, in layout units.
    pub width: f64,
    /// Sweeps per second.
    pub speed: f64,
    /// Seconds before the first sweep.
    pub delay: f64,
}

impl Default for ShineParams {
    fn default() -> Self {
        Self {
            unit: EffectUnit::Phrase,
            direction: ShineDirection::Horizontal,
            color: Rgba::WHITE,
            opacity: 0.75,
            width: 50.0,
            speed: 1.0,
            delay: 0.0,
        }
    }
}

/// One effect kernel together with its parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Effect {
    Entrance(EntranceParams),
    WaveY(WaveParams),
    WaveX(WaveParams),
    Shake(ShakeParams),
    Bounce(BounceParams),
    Spiral(SpiralParams),
    Flip(FlipParams),
    Stretch(StretchParams),
    Squish(SquishParams),
    Pulse(PulseParams),
    Rotate(RotateParams),
    Rainbow(RainbowParams),
    ColorLerp(ColorLerpParams),
    Fade(FadeParams),
    Flicker(FlickerParams),
    Blink(BlinkParams),
    GlowPulse(GlowParams),
    ShineSwipe(ShineParams),
}

impl Effect {
    /// Default-parameterized effect of the given kind.
    pub fn default_for(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Entrance => Self::Entrance(EntranceParams::default()),
            EffectKind::WaveY => Self::WaveY(WaveParams::default()),
            EffectKind::WaveX => Self::WaveX(WaveParams::default()),
            EffectKind::Shake => Self::Shake(ShakeParams::default()),
            EffectKind::Bounce => Self::Bounce(BounceParams::default()),
            EffectKind::Spiral => Self::Spiral(SpiralParams::default()),
            EffectKind::Flip => Self::Flip(FlipParams::default()),
            EffectKind::Stretch => Self::Stretch(StretchParams::default()),
            EffectKind::Squish => Self::Squish(SquishParams::default()),
            EffectKind::Pulse => Self::Pulse(PulseParams::default()),
            EffectKind::Rotate => Self::Rotate(RotateParams::default()),
            EffectKind::Rainbow => Self::Rainbow(RainbowParams::default()),
            EffectKind::ColorLerp => Self::ColorLerp(ColorLerpParams::default()),
            EffectKind::Fade => Self::Fade(FadeParams::default()),
            EffectKind::Flicker => Self::Flicker(FlickerParams::default()),
            EffectKind::Blink => Self::Blink(BlinkParams::default()),
            EffectKind::GlowPulse => Self::GlowPulse(GlowParams::default()),
            EffectKind::ShineSwipe => Self::ShineSwipe(ShineParams::default()),
        }
    }

    /// Kind tag of this effect.
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Entrance(_) => EffectKind::Entrance,
            Self::WaveY(_) => EffectKind::WaveY,
            Self::WaveX(_) => EffectKind::WaveX,
            Self::Shake(_) => EffectKind::Shake,
            Self::Bounce(_) => EffectKind::Bounce,
            Self::Spiral(_) => EffectKind::Spiral,
            Self::Flip(_) => EffectKind::Flip,
            Self::Stretch(_) => EffectKind::Stretch,
            Self::Squish(_) => EffectKind::Squish,
            Self::Pulse(_) => EffectKind::Pulse,
            Self::Rotate(_) => EffectKind::Rotate,
            Self::Rainbow(_) => EffectKind::Rainbow,
            Self::ColorLerp(_) => EffectKind::ColorLerp,
            Self::Fade(_) => EffectKind::Fade,
            Self::Flicker(_) => EffectKind::Flicker,
            Self::Blink(_) => EffectKind::Blink,
            Self::GlowPulse(_) => EffectKind::GlowPulse,
            Self::ShineSwipe(_) => EffectKind::ShineSwipe,
        }
    }

    /// Stage this effect contributes to; pulse depends on its mode.
    pub fn stage(&self) -> EffectStage {
        match self {
            Self::Entrance(_)
            | Self::WaveY(_)
            | Self::WaveX(_)
            | Self::Shake(_)
            | Self::Bounce(_)
            | Self::Spiral(_) => EffectStage::Offset,
            Self::Flip(_) | Self::Stretch(_) | Self::Squish(_) => EffectStage::Deform,
            Self::Pulse(p) => match p.mode {
                PulseMode::PerLetter => EffectStage::Deform,
                PulseMode::WholePhrase => EffectStage::WholeText,
            },
            Self::Rotate(_) => EffectStage::WholeText,
            Self::Rainbow(_)
            | Self::ColorLerp(_)
            | Self::Fade(_)
            | Self::Flicker(_)
            | Self::Blink(_)
            | Self::GlowPulse(_)
            | Self::ShineSwipe(_) => EffectStage::Color,
        }
    }

    /// Reject non-finite or out-of-range parameters.
    pub fn validate(&self) -> GlyphFxResult<()> {
        let kind = self.kind();
        let num = |name: &str, v: f64| -> GlyphFxResult<()> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(GlyphFxError::validation(format!(
                    "{kind:?}.{name} must be finite"
                )))
            }
        };
        let unit = |name: &str, v: f64| -> GlyphFxResult<()> {
            num(name, v)?;
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(GlyphFxError::validation(format!(
                    "{kind:?}.{name} must be in [0, 1]"
                )))
            }
        };
        let color = |name: &str, c: Rgba| -> GlyphFxResult<()> {
            for v in [c.r, c.g, c.b, c.a] {
                unit(name, v)?;
            }
            Ok(())
        };

        match *self {
            Self::Entrance(p) => {
                num("distance", p.distance)?;
                num("speed", p.speed)?;
                num("stagger", p.stagger)
            }
            Self::WaveY(p) | Self::WaveX(p) => {
                num("speed", p.speed)?;
                num("amplitude", p.amplitude)
            }
            Self::Shake(p) => {
                num("magnitude", p.magnitude)?;
                if p.magnitude < 0.0 {
                    return Err(GlyphFxError::validation("Shake.magnitude must be >= 0"));
                }
                Ok(())
            }
            Self::Bounce(p) => {
                num("speed", p.speed)?;
                num("height", p.height)
            }
            Self::Spiral(p) => {
                num("speed", p.speed)?;
                num("size", p.size)
            }
            Self::Flip(p) => {
                num("speed", p.speed)?;
                num("amount", p.amount)?;
                num("delay", p.delay)
            }
            Self::Stretch(p) => {
                num("speed", p.speed)?;
                num("amount", p.amount)
            }
            Self::Squish(p) => {
                num("speed", p.speed)?;
                num("amount", p.amount)
            }
            Self::Pulse(p) => {
                num("speed", p.speed)?;
                num("scale", p.scale)
            }
            Self::Rotate(p) => {
                num("speed", p.speed)?;
                num("amount", p.amount)
            }
            Self::Rainbow(p) => {
                num("speed", p.speed)?;
                num("offset", p.offset)
            }
            Self::ColorLerp(p) => {
                color("from", p.from)?;
                color("to", p.to)?;
                num("speed", p.speed)
            }
            Self::Fade(p) => num("speed", p.speed),
            Self::Flicker(p) => {
                num("speed", p.speed)?;
                unit("min_alpha", p.min_alpha)?;
                unit("max_alpha", p.max_alpha)
            }
            Self::Blink(p) => {
                num("speed", p.speed)?;
                unit("duty_cycle", p.duty_cycle)
            }
            Self::GlowPulse(p) => {
                color("color", p.color)?;
                unit("max", p.max)?;
                num("speed", p.speed)
            }
            Self::ShineSwipe(p) => {
                color("color", p.color)?;
                unit("opacity", p.opacity)?;
                num("width", p.width)?;
                if p.width < 0.0 {
                    return Err(GlyphFxError::validation("ShineSwipe.width must be >= 0"));
                }
                num("speed", p.speed)?;
                num("delay", p.delay)
            }
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// An effect plus its toggle, as stored in an [`EffectSet`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectEntry {
    /// Disabled entries keep their parameters but are never evaluated.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Kernel and parameters.
    #[serde(flatten)]
    pub effect: Effect,
}

/// Effect configuration keyed by kernel identity.
///
/// Serialized as a JSON list of entries; a later entry of the same kind replaces an earlier one.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<EffectEntry>", into = "Vec<EffectEntry>")]
pub struct EffectSet {
    entries: BTreeMap<EffectKind, EffectEntry>,
}

impl From<Vec<EffectEntry>> for EffectSet {
    fn from(list: Vec<EffectEntry>) -> Self {
        let entries = list
            .into_iter()
            .map(|e| (e.effect.kind(), e))
            .collect::<BTreeMap<_, _>>();
        Self { entries }
    }
}

impl From<EffectSet> for Vec<EffectEntry> {
    fn from(set: EffectSet) -> Self {
        set.entries.into_values().collect()
    }
}

impl EffectSet {
    /// Empty set: the identity pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every kind at its default parameters, all disabled.
    pub fn with_defaults() -> Self {
        let entries = EffectKind::ALL
            .iter()
            .map(|&k| {
                (
                    k,
                    EffectEntry {
                        enabled: false,
                        effect: Effect::default_for(k),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Parse and validate a JSON effect list.
    pub fn from_json_str(json: &str) -> GlyphFxResult<Self> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Pretty-printed JSON effect list.
    pub fn to_json_string(&self) -> GlyphFxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Insert (or replace) an effect and enable it. Returns the previous entry of that kind.
    pub fn insert(&mut self, effect: Effect) -> Option<EffectEntry> {
        self.entries.insert(
            effect.kind(),
            EffectEntry {
                enabled: true,
                effect,
            },
        )
    }

    /// Builder-style [`EffectSet::insert`].
    pub fn with(mut self, effect: Effect) -> Self {
        self.insert(effect);
        self
    }

    /// Remove an effect entirely.
    pub fn remove(&mut self, kind: EffectKind) -> Option<EffectEntry> {
        self.entries.remove(&kind)
    }

    /// Toggle an effect, inserting its defaults if it was absent.
    pub fn set_enabled(&mut self, kind: EffectKind, enabled: bool) {
        self.entries
            .entry(kind)
            .or_insert_with(|| EffectEntry {
                enabled,
                effect: Effect::default_for(kind),
            })
            .enabled = enabled;
    }

    /// True when `kind` is present and enabled.
    pub fn is_enabled(&self, kind: EffectKind) -> bool {
        self.entries.get(&kind).is_some_and(|e| e.enabled)
    }

    /// Entry for `kind`, enabled or not.
    pub fn get(&self, kind: EffectKind) -> Option<&EffectEntry> {
        self.entries.get(&kind)
    }

    /// Edit the parameters stored under `kind`. Returns `Ok(false)` when `kind` is absent.
    ///
    /// An edit that changes the effect's kind is rejected and the entry is left unchanged.
    pub fn update(
        &mut self,
        kind: EffectKind,
        edit: impl FnOnce(&mut Effect),
    ) -> GlyphFxResult<bool> {
        let Some(entry) = self.entries.get_mut(&kind) else {
            return Ok(false);
        };
        let mut effect = entry.effect;
        edit(&mut effect);
        if effect.kind() != kind {
            return Err(GlyphFxError::validation(format!(
                "cannot store {:?} under {kind:?}",
                effect.kind()
            )));
        }
        entry.effect = effect;
        Ok(true)
    }

    /// Enabled effects in evaluation order.
    pub fn enabled(&self) -> impl Iterator<Item = &Effect> + '_ {
        self.entries
            .values()
            .filter(|e| e.enabled)
            .map(|e| &e.effect)
    }

    /// Enabled effects of one stage, in evaluation order.
    pub fn enabled_in(&self, stage: EffectStage) -> impl Iterator<Item = &Effect> + '_ {
        self.enabled().filter(move |e| e.stage() == stage)
    }

    /// Validate every entry, enabled or not.
    pub fn validate(&self) -> GlyphFxResult<()> {
        for entry in self.entries.values() {
            entry.effect.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/config.rs"]
mod tests;
