//! Frame-rate driven render resolution.
//!
//! Frames are counted over a fixed window. A slow window lowers the render
//! scale one step, a fast one raises it one step. The scale sizes the image
//! the office camera renders into; the window, its scale factor and the UI
//! stay as they are.

use std::time::Duration;

use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::camera::OfficeRenderTarget;
use crate::camera::resize_render_target;
use crate::camera::scaled_size;
use crate::schedule::OfficeSet;

pub const RESOLUTION_WINDOW_MS: f32 = 1000.0;
pub const RESOLUTION_LOW_FPS: f32 = 30.0;
pub const RESOLUTION_HIGH_FPS: f32 = 55.0;
pub const RESOLUTION_STEP: f32 = 0.05;
pub const RESOLUTION_MIN_SCALE: f32 = 0.5;
pub const RESOLUTION_MAX_SCALE: f32 = 1.0;

/// Slack for comparing scales that went through `f32` rounding.
const SCALE_EPSILON: f32 = 1e-4;

pub struct ResolutionPlugin;

impl Plugin for ResolutionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<ResolutionConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F3)),
        )
        .init_resource::<ResolutionConfig>()
        .init_resource::<ResolutionGovernor>()
        .add_systems(
            Update,
            (govern_resolution, apply_render_scale)
                .chain()
                .in_set(OfficeSet::Presentation),
        );
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct ResolutionConfig {
    #[inspector(min = 250.0, max = 5000.0, display = NumberDisplay::Slider)]
    pub window_ms:  f32,
    /// Below this frame rate the scale steps down.
    #[inspector(min = 10.0, max = 60.0, display = NumberDisplay::Slider)]
    pub low_fps:    f32,
    /// Above this frame rate the scale steps up.
    #[inspector(min = 30.0, max = 144.0, display = NumberDisplay::Slider)]
    pub high_fps:   f32,
    #[inspector(min = 0.01, max = 0.25, display = NumberDisplay::Slider)]
    pub step:       f32,
    #[inspector(min = 0.1, max = 1.0, display = NumberDisplay::Slider)]
    pub min_scale:  f32,
    #[inspector(min = 0.5, max = 2.0, display = NumberDisplay::Slider)]
    pub max_scale:  f32,
    /// Smallest change worth resizing the backing buffer for.
    #[inspector(min = 0.01, max = 0.25, display = NumberDisplay::Slider)]
    pub min_change: f32,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            window_ms:  RESOLUTION_WINDOW_MS,
            low_fps:    RESOLUTION_LOW_FPS,
            high_fps:   RESOLUTION_HIGH_FPS,
            step:       RESOLUTION_STEP,
            min_scale:  RESOLUTION_MIN_SCALE,
            max_scale:  RESOLUTION_MAX_SCALE,
            min_change: RESOLUTION_STEP,
        }
    }
}

impl ResolutionConfig {
    fn window(&self) -> Duration { Duration::from_secs_f32(self.window_ms.max(1.0) / 1000.0) }
}

#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct ResolutionGovernor {
    scale:         f32,
    /// Scale last reported as applied.
    applied_scale: f32,
    frame_count:   u32,
    window_start:  Option<Duration>,
}

impl Default for ResolutionGovernor {
    fn default() -> Self {
        Self {
            scale:         RESOLUTION_MAX_SCALE,
            applied_scale: RESOLUTION_MAX_SCALE,
            frame_count:   0,
            window_start:  None,
        }
    }
}

impl ResolutionGovernor {
    pub const fn scale(&self) -> f32 { self.scale }

    /// Counts one rendered frame at time `now`. Returns a new scale when the
    /// window closed and the scale moved far enough to be worth applying.
    #[allow(
        clippy::cast_precision_loss,
        reason = "frame counts stay far below f32 precision limits"
    )]
    pub fn record_frame(&mut self, now: Duration, config: &ResolutionConfig) -> Option<f32> {
        self.frame_count += 1;
        let window_start = *self.window_start.get_or_insert(now);
        let elapsed = now.saturating_sub(window_start);
        if elapsed < config.window() {
            return None;
        }

        let fps = self.frame_count as f32 * 1000.0 / (elapsed.as_secs_f32() * 1000.0);
        self.frame_count = 0;
        self.window_start = Some(now);

        if fps < config.low_fps && self.scale > config.min_scale {
            self.scale = round_to_hundredths((self.scale - config.step).max(config.min_scale));
        } else if fps > config.high_fps && self.scale < config.max_scale {
            self.scale = round_to_hundredths((self.scale + config.step).min(config.max_scale));
        }

        if (self.scale - self.applied_scale).abs() + SCALE_EPSILON < config.min_change {
            return None;
        }
        self.applied_scale = self.scale;
        Some(self.scale)
    }
}

fn round_to_hundredths(value: f32) -> f32 { (value * 100.0).round() / 100.0 }

fn govern_resolution(
    time: Res<Time<Real>>,
    config: Res<ResolutionConfig>,
    mut governor: ResMut<ResolutionGovernor>,
) {
    if let Some(scale) = governor.record_frame(time.elapsed(), &config) {
        info!("render scale -> {scale:.2}");
    }
}

/// Keeps the office image at the governed fraction of the window's physical
/// size. Also follows window resizes, so it runs every frame.
fn apply_render_scale(
    governor: Res<ResolutionGovernor>,
    window: Single<&Window, With<PrimaryWindow>>,
    target: Res<OfficeRenderTarget>,
    mut images: ResMut<Assets<Image>>,
) {
    let size = scaled_size(window.physical_size(), governor.scale());
    if resize_render_target(&mut images, &target, size) {
        debug!("office render target -> {}x{}", size.x, size.y);
    }
}
