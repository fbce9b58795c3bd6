//! Entrance animations for the landing regions.
//!
//! Animations are plain data. [`entrance_specs`] declares one [`AnimationSpec`]
//! per animated [`Region`]; an [`AnimationEngine`] turns a spec into whatever
//! it needs to play it. The default markup of every region is its settled
//! state, so an engine that does nothing leaves a fully legible page.
//!
//! ```text
//! mount ─┬─ hero text   0ms ──── 800ms   fade + rise 40px
//!        ├─ hero image  0ms ── 600ms     fade + scale 0.95
//!        └─ value props     300ms ──── 1100ms   fade
//! ```

use std::fmt::Write as _;

/// Top-level blocks that animate on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HeroText,
    HeroImage,
    ValueProposition,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::HeroText, Region::HeroImage, Region::ValueProposition];

    pub fn slug(self) -> &'static str {
        match self {
            Region::HeroText => "hero-text",
            Region::HeroImage => "hero-image",
            Region::ValueProposition => "value-proposition",
        }
    }
}

/// Opacity plus optional vertical offset (px) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub offset_y: Option<f32>,
    pub scale: Option<f32>,
}

impl VisualState {
    /// Fully opaque, not shifted, not scaled.
    pub const SETTLED: VisualState = VisualState {
        opacity: 1.0,
        offset_y: None,
        scale: None,
    };

    pub const fn hidden() -> Self {
        VisualState {
            opacity: 0.0,
            offset_y: None,
            scale: None,
        }
    }

    pub const fn with_offset_y(mut self, px: f32) -> Self {
        self.offset_y = Some(px);
        self
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Declarations for a CSS rule body, e.g. `opacity: 0; transform: translateY(40px);`
    pub fn to_css(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        let mut transforms = Vec::new();
        if let Some(y) = self.offset_y {
            transforms.push(format!("translateY({y}px)"));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({scale})"));
        }
        if !transforms.is_empty() {
            let _ = write!(css, " transform: {};", transforms.join(" "));
        }
        css
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub initial: VisualState,
    pub settled: VisualState,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl AnimationSpec {
    /// Time from mount until the region is at rest.
    pub fn ends_at_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }
}

/// The entrance declared for `region`.
pub fn entrance_spec(region: Region) -> AnimationSpec {
    match region {
        Region::HeroText => AnimationSpec {
            initial: VisualState::hidden().with_offset_y(40.0),
            settled: VisualState::SETTLED.with_offset_y(0.0),
            duration_ms: 800,
            delay_ms: 0,
        },
        Region::HeroImage => AnimationSpec {
            initial: VisualState::hidden().with_scale(0.95),
            settled: VisualState::SETTLED.with_scale(1.0),
            duration_ms: 600,
            delay_ms: 0,
        },
        // Delayed so it follows the hero instead of competing with it.
        Region::ValueProposition => AnimationSpec {
            initial: VisualState::hidden(),
            settled: VisualState::SETTLED,
            duration_ms: 800,
            delay_ms: 300,
        },
    }
}

/// All entrance specs in region order.
pub fn entrance_specs() -> [(Region, AnimationSpec); 3] {
    Region::ALL.map(|region| (region, entrance_spec(region)))
}

/// What an engine hands back to drive one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntranceStyle {
    /// Inline `style` attribute for the region's element, without a trailing
    /// `;` (Leptos appends one).
    pub style: String,
    /// Stylesheet rules the inline style depends on.
    pub keyframes: String,
}

/// Animation engine collaborator.
///
/// Returning `None` means the engine cannot animate `region`; the region then
/// renders in its settled state with no inline style.
pub trait AnimationEngine: Send + Sync {
    fn animate(&self, region: Region, spec: &AnimationSpec) -> Option<EntranceStyle>;
}

/// Engine that never animates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnimationEngine;

impl AnimationEngine for NoopAnimationEngine {
    fn animate(&self, _region: Region, _spec: &AnimationSpec) -> Option<EntranceStyle> {
        None
    }
}

/// Plays specs as CSS keyframe animations.
///
/// A CSS animation starts when its element is inserted and runs once, so the
/// entrance plays once per mount and later re-renders, scrolling or clicks
/// don't restart it. `fill-mode: both` holds the initial frame during the
/// delay and the settled frame afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssAnimationEngine;

impl CssAnimationEngine {
    pub fn keyframes_name(region: Region) -> String {
        format!("edupath-enter-{}", region.slug())
    }
}

impl AnimationEngine for CssAnimationEngine {
    fn animate(&self, region: Region, spec: &AnimationSpec) -> Option<EntranceStyle> {
        let name = Self::keyframes_name(region);
        Some(EntranceStyle {
            style: format!(
                "animation: {name} {}ms ease-out {}ms both",
                spec.duration_ms, spec.delay_ms
            ),
            keyframes: format!(
                "@keyframes {name} {{ from {{ {} }} to {{ {} }} }}",
                spec.initial.to_css(),
                spec.settled.to_css()
            ),
        })
    }
}

/// Per-region result of running every entrance spec through an engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrancePlan {
    hero_text: Option<String>,
    hero_image: Option<String>,
    value_proposition: Option<String>,
    keyframes: String,
}

impl EntrancePlan {
    /// Inline style for `region`, `None` when it renders settled.
    pub fn style_for(&self, region: Region) -> Option<String> {
        match region {
            Region::HeroText => self.hero_text.clone(),
            Region::HeroImage => self.hero_image.clone(),
            Region::ValueProposition => self.value_proposition.clone(),
        }
    }

    /// Keyframes for every animated region, newline separated. Empty when
    /// nothing animates.
    pub fn keyframes(&self) -> &str {
        &self.keyframes
    }

    pub fn animated_regions(&self) -> usize {
        Region::ALL
            .iter()
            .filter(|region| self.style_for(**region).is_some())
            .count()
    }

    fn slot(&mut self, region: Region) -> &mut Option<String> {
        match region {
            Region::HeroText => &mut self.hero_text,
            Region::HeroImage => &mut self.hero_image,
            Region::ValueProposition => &mut self.value_proposition,
        }
    }
}

/// Hands each region's entrance spec to the engine. The regions animate
/// independently; ordering comes only from the declared delays.
pub struct EntranceSequencer<'a> {
    engine: &'a dyn AnimationEngine,
}

impl<'a> EntranceSequencer<'a> {
    pub fn new(engine: &'a dyn AnimationEngine) -> Self {
        Self { engine }
    }

    pub fn plan(&self) -> EntrancePlan {
        let mut plan = EntrancePlan::default();
        let mut keyframes = Vec::new();
        for (region, spec) in entrance_specs() {
            if let Some(entrance) = self.engine.animate(region, &spec) {
                *plan.slot(region) = Some(entrance.style);
                if !entrance.keyframes.is_empty() {
                    keyframes.push(entrance.keyframes);
                }
            }
        }
        plan.keyframes = keyframes.join("\n");
        log::debug!("entrance plan built: {} animated regions", plan.animated_regions());
        plan
    }
}
