use std::f32::consts::FRAC_PI_2;

/// Duration of a camera flight between two focus targets.
pub const CAMERA_TRANSITION_DURATION_MS: f32 = 500.0;

/// User zoom is clamped to this distance range from the look-at point.
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
pub const CAMERA_MAX_DISTANCE: f32 = 10.0;

pub const CAMERA_ORBIT_SENSITIVITY: f32 = 1.0;
pub const CAMERA_ZOOM_SENSITIVITY: f32 = 0.5;
/// How far user orbit and zoom lag behind the input, 0 is instant.
pub const CAMERA_ORBIT_SMOOTHNESS: f32 = 0.1;
pub const CAMERA_ZOOM_SMOOTHNESS: f32 = 0.1;

/// Polar angle is measured from straight up. Exactly 0 would flip the view
/// over the top, so stop just short of it.
pub const CAMERA_MIN_POLAR_ANGLE: f32 = 0.01;
/// Never orbit below the floor.
pub const CAMERA_MAX_POLAR_ANGLE: f32 = FRAC_PI_2;
pub const CAMERA_MIN_AZIMUTH_ANGLE: f32 = -FRAC_PI_2;
pub const CAMERA_MAX_AZIMUTH_ANGLE: f32 = FRAC_PI_2;
