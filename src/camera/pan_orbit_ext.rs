use bevy_panorbit_camera::PanOrbitCamera;

use super::CameraConfig;
use super::orbit::OrbitAngles;
use crate::focus::CameraPose;

/// Extension trait for `PanOrbitCamera` so the rest of the camera code talks
/// in `CameraPose`s and config values.
pub trait PanOrbitCameraExt {
    /// Flights write exact poses, so smoothing would only make them lag.
    fn disable_interpolation(&mut self);

    /// Smooth user orbit and zoom at home.
    fn enable_interpolation(&mut self, camera_config: &CameraConfig);

    /// Sensitivities and clamp ranges for user orbit.
    fn configure_orbit(&mut self, camera_config: &CameraConfig);

    /// Flights pass through poses outside the user orbit range.
    fn lift_orbit_limits(&mut self);

    /// Moves the camera to `pose` on its next update.
    fn set_pose(&mut self, pose: CameraPose);

    /// Where the camera is right now, once it has been initialized.
    fn current_pose(&self) -> Option<CameraPose>;
}

impl PanOrbitCameraExt for PanOrbitCamera {
    fn disable_interpolation(&mut self) {
        self.zoom_smoothness = 0.0;
        self.pan_smoothness = 0.0;
        self.orbit_smoothness = 0.0;
    }

    fn enable_interpolation(&mut self, camera_config: &CameraConfig) {
        self.zoom_smoothness = camera_config.zoom_smoothness;
        self.orbit_smoothness = camera_config.orbit_smoothness;
    }

    fn configure_orbit(&mut self, camera_config: &CameraConfig) {
        self.orbit_sensitivity = camera_config.orbit_sensitivity;
        self.zoom_sensitivity = camera_config.zoom_sensitivity;
        // the look-at point stays put at home
        self.pan_sensitivity = 0.0;

        let limits = camera_config.orbit_limits();
        let (pitch_lower, pitch_upper) = limits.pitch_range();
        self.pitch_lower_limit = Some(pitch_lower);
        self.pitch_upper_limit = Some(pitch_upper);
        self.yaw_lower_limit = Some(limits.min_azimuth);
        self.yaw_upper_limit = Some(limits.max_azimuth);
        self.zoom_lower_limit = limits.min_distance;
        self.zoom_upper_limit = Some(limits.max_distance);
    }

    fn lift_orbit_limits(&mut self) {
        self.pitch_lower_limit = None;
        self.pitch_upper_limit = None;
        self.yaw_lower_limit = None;
        self.yaw_upper_limit = None;
        self.zoom_lower_limit = 0.0;
        self.zoom_upper_limit = None;
    }

    fn set_pose(&mut self, pose: CameraPose) {
        let angles = OrbitAngles::from_pose(pose);
        self.target_focus = angles.focus;
        self.target_yaw = angles.yaw;
        self.target_pitch = angles.pitch;
        self.target_radius = angles.radius;
        self.force_update = true;
    }

    fn current_pose(&self) -> Option<CameraPose> {
        let angles = OrbitAngles {
            focus:  self.focus,
            yaw:    self.yaw?,
            pitch:  self.pitch?,
            radius: self.radius?,
        };
        Some(angles.to_pose())
    }
}
