use bevy::math::Vec3;

/// Altitude of the home camera. No other pose sits at this height.
pub const HOME_ALTITUDE: f32 = 3.0;
pub const HOME_POSITION: Vec3 = Vec3::new(0.0, HOME_ALTITUDE, 5.0);
pub const HOME_LOOK_AT: Vec3 = Vec3::ZERO;

/// Photo frame hangs on the back wall, right of the desk.
pub const PHOTO_FRAME_POSITION: Vec3 = Vec3::new(1.8, 2.2, 0.0);
/// Camera offset from a framed object when zoomed in on it.
pub const FRAME_VIEW_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 2.0);

/// Degree certificate hangs on the back wall, left of the desk.
pub const DEGREE_FRAME_POSITION: Vec3 = Vec3::new(-1.8, 2.0, 0.01);
pub const DEGREE_VIEW_OFFSET: Vec3 = Vec3::new(0.0, 0.4, 1.6);

/// CV document lies flat on the desk.
pub const CV_DOCUMENT_POSITION: Vec3 = Vec3::new(0.9, 1.13, 0.9);
pub const CV_VIEW_OFFSET: Vec3 = Vec3::new(0.0, 0.8, 0.6);

/// Laptop sits at the center of the desk.
pub const LAPTOP_POSITION: Vec3 = Vec3::new(0.0, 1.1, 0.5);
/// Center of the tilted laptop screen, relative to the laptop.
pub const LAPTOP_SCREEN_OFFSET: Vec3 = Vec3::new(0.0, 0.3, -0.3);
pub const LAPTOP_VIEW_OFFSET: Vec3 = Vec3::new(0.0, 0.35, 1.3);

/// Two poses closer than this are treated as the same pose.
pub const POSE_TOLERANCE: f32 = 1e-3;
