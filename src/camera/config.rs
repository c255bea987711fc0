use std::time::Duration;

use bevy::color::palettes::tailwind;
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::constants::*;
use super::orbit::OrbitLimits;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<CameraConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F1)),
        )
        .init_resource::<CameraConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CameraConfig {
    pub clear_color:            Color,
    /// Camera flight time between focus targets, in milliseconds.
    #[inspector(min = 0.0, max = 1500.0, display = NumberDisplay::Slider)]
    pub transition_duration_ms: f32,
    #[inspector(min = 0.5, max = 5.0, display = NumberDisplay::Slider)]
    pub min_distance:           f32,
    #[inspector(min = 5.0, max = 30.0, display = NumberDisplay::Slider)]
    pub max_distance:           f32,
    #[inspector(min = 0.1, max = 3.0, display = NumberDisplay::Slider)]
    pub orbit_sensitivity:      f32,
    #[inspector(min = 0.1, max = 3.0, display = NumberDisplay::Slider)]
    pub zoom_sensitivity:       f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub orbit_smoothness:       f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub zoom_smoothness:        f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            clear_color:            Color::from(tailwind::SLATE_200),
            transition_duration_ms: CAMERA_TRANSITION_DURATION_MS,
            min_distance:           CAMERA_MIN_DISTANCE,
            max_distance:           CAMERA_MAX_DISTANCE,
            orbit_sensitivity:      CAMERA_ORBIT_SENSITIVITY,
            zoom_sensitivity:       CAMERA_ZOOM_SENSITIVITY,
            orbit_smoothness:       CAMERA_ORBIT_SMOOTHNESS,
            zoom_smoothness:        CAMERA_ZOOM_SMOOTHNESS,
        }
    }
}

impl CameraConfig {
    pub fn transition_duration(&self) -> Duration {
        Duration::from_secs_f32(self.transition_duration_ms.max(0.0) / 1000.0)
    }

    /// The inspector can push `min_distance` past `max_distance`; the
    /// limits are ordered here before they reach the orbit camera.
    pub const fn orbit_limits(&self) -> OrbitLimits {
        let (min_distance, max_distance) = if self.min_distance <= self.max_distance {
            (self.min_distance, self.max_distance)
        } else {
            (self.max_distance, self.min_distance)
        };
        OrbitLimits {
            min_distance,
            max_distance,
            min_polar: CAMERA_MIN_POLAR_ANGLE,
            max_polar: CAMERA_MAX_POLAR_ANGLE,
            min_azimuth: CAMERA_MIN_AZIMUTH_ANGLE,
            max_azimuth: CAMERA_MAX_AZIMUTH_ANGLE,
        }
    }
}
