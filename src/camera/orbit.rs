//! Free orbit around the home view.
//!
//! `PanOrbitCamera` handles the input: left drag rotates around the look-at
//! point, the wheel zooms. Orbiting is only possible while the camera rests
//! at home; every other focus target is framed by the rig alone.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_panorbit_camera::ActiveCameraData;
use bevy_panorbit_camera::PanOrbitCamera;

use super::CameraConfig;
use super::cameras::OfficeCamera;
use super::motion::CameraRig;
use super::pan_orbit_ext::PanOrbitCameraExt;
use crate::focus::CameraPose;
use crate::focus::FocusTarget;
use crate::interaction::InteractionState;

/// Clamp ranges for user orbit. Angles in radians, polar measured from +Y,
/// azimuth around +Y starting at +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar:    f32,
    pub max_polar:    f32,
    pub min_azimuth:  f32,
    pub max_azimuth:  f32,
}

impl OrbitLimits {
    /// Polar limits as orbit pitch, which is measured up from the horizon.
    /// Returned as `(lower, upper)`.
    pub const fn pitch_range(&self) -> (f32, f32) {
        (FRAC_PI_2 - self.max_polar, FRAC_PI_2 - self.min_polar)
    }
}

/// A pose in orbit terms: the camera sits `radius` away from `focus`, turned
/// `yaw` around +Y from +Z and raised `pitch` above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAngles {
    pub focus:  Vec3,
    pub yaw:    f32,
    pub pitch:  f32,
    pub radius: f32,
}

impl OrbitAngles {
    pub fn from_pose(pose: CameraPose) -> Self {
        let offset = pose.position - pose.look_at;
        Self {
            focus:  pose.look_at,
            yaw:    offset.x.atan2(offset.z),
            pitch:  offset.y.atan2(offset.x.hypot(offset.z)),
            radius: offset.length(),
        }
    }

    pub fn to_pose(self) -> CameraPose {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        let direction = Vec3::new(yaw_sin * pitch_cos, pitch_sin, yaw_cos * pitch_cos);
        CameraPose::new(self.focus + direction * self.radius, self.focus)
    }
}

/// User orbit only reaches the camera at home, and never mid-flight.
pub const fn orbit_allowed(focus: FocusTarget, rig: &CameraRig) -> bool {
    focus.is_home() && rig.is_idle()
}

pub fn gate_orbit_controls(
    interaction: Res<InteractionState>,
    camera_config: Res<CameraConfig>,
    camera: Single<(&CameraRig, &mut PanOrbitCamera), With<OfficeCamera>>,
) {
    let (rig, mut pan_orbit) = camera.into_inner();
    let allowed = orbit_allowed(interaction.focus(), rig);

    if pan_orbit.enabled != allowed {
        pan_orbit.enabled = allowed;
        debug!("orbit controls enabled: {allowed}");
    } else if !(allowed && camera_config.is_changed()) {
        return;
    }

    if allowed {
        pan_orbit.configure_orbit(&camera_config);
        pan_orbit.enable_interpolation(&camera_config);
    } else {
        pan_orbit.lift_orbit_limits();
        pan_orbit.disable_interpolation();
    }
}

/// The office renders into an image stretched over the window, so the orbit
/// camera can't find itself under the cursor. Point its input at the office
/// camera directly.
pub fn route_orbit_input(
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<Entity, With<OfficeCamera>>,
    mut active_camera: ResMut<ActiveCameraData>,
) {
    let size = window.size();
    active_camera.entity = Some(*camera);
    active_camera.viewport_size = Some(size);
    active_camera.window_size = Some(size);
    active_camera.manual = true;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::camera::motion::drive_camera_rig;
    use crate::focus::FocusKind;
    use crate::focus::FocusRegistry;
    use crate::interaction::SceneObject;

    const FLIGHT: Duration = Duration::from_millis(500);

    fn flying_rig() -> CameraRig {
        let mut rig = CameraRig::default();
        let target = FocusRegistry::default().pose_for(FocusKind::Photo);
        assert!(rig.retarget(FocusKind::Photo, target, FLIGHT));
        rig
    }

    #[test]
    fn orbit_allowed_at_home_while_idle() {
        assert!(orbit_allowed(FocusTarget::Home, &CameraRig::default()));
    }

    #[test]
    fn orbit_refused_at_home_while_flying() {
        assert!(!orbit_allowed(FocusTarget::Home, &flying_rig()));
    }

    #[test]
    fn orbit_refused_away_from_home() {
        let rig = CameraRig::default();
        for target in [
            FocusTarget::Photo(0),
            FocusTarget::Photo(1),
            FocusTarget::Degree,
            FocusTarget::Cv,
            FocusTarget::Website,
        ] {
            assert!(!orbit_allowed(target, &rig), "{target:?} let orbit through");
        }
    }

    #[test]
    fn home_pose_faces_straight_down_the_room() {
        let angles = OrbitAngles::from_pose(CameraPose::HOME);
        assert!(angles.yaw.abs() < 1e-5);
        assert!(angles.pitch > 0.0, "home looks down on the desk");
        assert!((angles.radius - CameraPose::HOME.distance()).abs() < 1e-5);
        assert!(angles.to_pose().approx_eq(CameraPose::HOME, 1e-4));
    }

    #[test]
    fn every_focus_pose_survives_orbit_terms() {
        let registry = FocusRegistry::default();
        for kind in FocusKind::ALL {
            let pose = registry.pose_for(kind);
            let back = OrbitAngles::from_pose(pose).to_pose();
            assert!(back.approx_eq(pose, 1e-4), "{kind:?} drifted to {back:?}");
        }
    }

    #[test]
    fn home_sits_inside_the_orbit_limits() {
        let limits = CameraConfig::default().orbit_limits();
        let angles = OrbitAngles::from_pose(CameraPose::HOME);
        let (pitch_lower, pitch_upper) = limits.pitch_range();

        assert!((pitch_lower..=pitch_upper).contains(&angles.pitch));
        assert!((limits.min_azimuth..=limits.max_azimuth).contains(&angles.yaw));
        assert!((limits.min_distance..=limits.max_distance).contains(&angles.radius));
    }

    #[test]
    fn inverted_distance_config_still_orders_limits() {
        let config = CameraConfig {
            min_distance: 8.0,
            max_distance: 3.0,
            ..default()
        };
        let limits = config.orbit_limits();
        assert!(limits.min_distance <= limits.max_distance);
    }

    fn office_app() -> App {
        let config = CameraConfig::default();
        let home = OrbitAngles::from_pose(CameraPose::HOME);
        let mut pan_orbit = PanOrbitCamera {
            focus: home.focus,
            yaw: Some(home.yaw),
            pitch: Some(home.pitch),
            radius: Some(home.radius),
            ..default()
        };
        pan_orbit.configure_orbit(&config);
        pan_orbit.enable_interpolation(&config);

        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(config)
            .init_resource::<FocusRegistry>()
            .insert_resource(InteractionState::new(2, Duration::from_millis(1000)))
            .add_systems(Update, (drive_camera_rig, gate_orbit_controls).chain());
        app.world_mut().spawn((OfficeCamera, CameraRig::default(), pan_orbit));
        app
    }

    fn step(app: &mut App, delta: Duration) {
        app.world_mut().resource_mut::<Time>().advance_by(delta);
        app.update();
    }

    fn office_camera(app: &mut App, check: impl Fn(&CameraRig, &PanOrbitCamera) -> bool) -> bool {
        let mut cameras = app.world_mut().query::<(&CameraRig, &PanOrbitCamera)>();
        cameras
            .single(app.world())
            .is_ok_and(|(rig, pan_orbit)| check(rig, pan_orbit))
    }

    #[test]
    fn flight_locks_orbit_and_steers_the_orbit_camera() {
        let mut app = office_app();
        app.world_mut()
            .resource_mut::<InteractionState>()
            .on_object_clicked(SceneObject::CvDocument);
        step(&mut app, Duration::from_millis(100));

        assert!(office_camera(&mut app, |rig, pan_orbit| {
            let written = OrbitAngles {
                focus:  pan_orbit.target_focus,
                yaw:    pan_orbit.target_yaw,
                pitch:  pan_orbit.target_pitch,
                radius: pan_orbit.target_radius,
            }
            .to_pose();
            rig.is_transitioning()
                && !pan_orbit.enabled
                && pan_orbit.force_update
                && pan_orbit.orbit_smoothness.abs() < f32::EPSILON
                && pan_orbit.zoom_upper_limit.is_none()
                && written.approx_eq(rig.pose(), 1e-4)
        }));
    }

    #[test]
    fn orbit_returns_once_settled_back_home() {
        let mut app = office_app();
        app.world_mut()
            .resource_mut::<InteractionState>()
            .on_object_clicked(SceneObject::CvDocument);
        step(&mut app, Duration::from_millis(100));

        app.world_mut().resource_mut::<InteractionState>().on_overlay_close();
        step(&mut app, Duration::from_millis(100));
        assert!(office_camera(&mut app, |_, pan_orbit| !pan_orbit.enabled));

        step(&mut app, FLIGHT);
        let limits = CameraConfig::default().orbit_limits();
        assert!(office_camera(&mut app, |rig, pan_orbit| {
            rig.is_idle()
                && rig.pose().approx_eq(CameraPose::HOME, 1e-4)
                && pan_orbit.enabled
                && pan_orbit
                    .zoom_upper_limit
                    .is_some_and(|max| (max - limits.max_distance).abs() < f32::EPSILON)
                && pan_orbit.orbit_smoothness > 0.0
        }));
    }
}
