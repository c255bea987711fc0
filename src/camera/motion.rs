//! Camera flights between focus targets.
//!
//! A flight blends position and look-at from a single elapsed clock through
//! one easing curve, so both always land on the same frame. A new focus
//! request replaces the flight in progress and starts from wherever the camera
//! is right now; requests are never queued.

use std::time::Duration;

use bevy::math::curve::Curve;
use bevy::math::curve::EaseFunction;
use bevy::math::curve::EasingCurve;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use super::cameras::OfficeCamera;
use super::pan_orbit_ext::PanOrbitCameraExt;
use crate::camera::CameraConfig;
use crate::focus::CameraPose;
use crate::focus::FocusKind;
use crate::focus::FocusRegistry;
use crate::focus::POSE_TOLERANCE;
use crate::interaction::InteractionState;

/// Emitted by [`CameraRig::advance`] on the frame a flight lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigEvent {
    Settled,
}

#[derive(Clone, Copy, Reflect, Default, Debug, PartialEq)]
enum Motion {
    #[default]
    Idle,
    Transitioning {
        from:     CameraPose,
        to:       CameraPose,
        elapsed:  Duration,
        duration: Duration,
    },
}

/// Owns the live camera pose. Flights and orbit input both write through the
/// rig, orbit input is refused while a flight is in progress, and the orbit
/// camera is handed the result.
#[derive(Component, Reflect, Default, Debug, Clone)]
#[reflect(Component, Default)]
pub struct CameraRig {
    pose:    CameraPose,
    /// The focus the rig is parked at, or flying toward.
    heading: FocusKind,
    motion:  Motion,
}

impl CameraRig {
    pub const fn new(pose: CameraPose, heading: FocusKind) -> Self {
        Self {
            pose,
            heading,
            motion: Motion::Idle,
        }
    }

    pub const fn pose(&self) -> CameraPose { self.pose }

    pub const fn heading(&self) -> FocusKind { self.heading }

    pub const fn is_idle(&self) -> bool { matches!(self.motion, Motion::Idle) }

    pub const fn is_transitioning(&self) -> bool { !self.is_idle() }

    /// Pose the current flight will land on, if flying.
    pub const fn destination(&self) -> Option<CameraPose> {
        match self.motion {
            Motion::Idle => None,
            Motion::Transitioning { to, .. } => Some(to),
        }
    }

    /// Points the rig at `target`. Returns `true` when a new flight was
    /// launched.
    ///
    /// Asking for the pose the camera is at right now launches nothing and
    /// ends any flight on the spot. Asking for the pose it is already flying
    /// toward keeps that flight. Otherwise any flight in progress is dropped
    /// and the new one starts from the current, possibly mid-air, pose.
    pub fn retarget(&mut self, heading: FocusKind, target: CameraPose, duration: Duration) -> bool {
        self.heading = heading;

        if self.pose.approx_eq(target, POSE_TOLERANCE) {
            self.motion = Motion::Idle;
            return false;
        }
        if self
            .destination()
            .is_some_and(|destination| destination.approx_eq(target, POSE_TOLERANCE))
        {
            return false;
        }

        if duration.is_zero() {
            self.pose = target;
            self.motion = Motion::Idle;
            return false;
        }

        self.motion = Motion::Transitioning {
            from: self.pose,
            to: target,
            elapsed: Duration::ZERO,
            duration,
        };
        true
    }

    /// Steps the current flight by `delta`.
    pub fn advance(&mut self, delta: Duration) -> Option<RigEvent> {
        let Motion::Transitioning {
            from,
            to,
            elapsed,
            duration,
        } = &mut self.motion
        else {
            return None;
        };

        *elapsed += delta;
        let t = (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0);

        if t >= 1.0 {
            self.pose = *to;
            self.motion = Motion::Idle;
            return Some(RigEvent::Settled);
        }

        self.pose = from.lerp(*to, ease_in_out(t));
        None
    }

    /// Applies a user orbit. Ignored mid-flight, the flight owns the camera.
    pub fn orbit(&mut self, pose: CameraPose) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.pose = pose;
        true
    }
}

/// Quadratic ease-in-out, the same curve as gsap's `power2.inOut`.
fn ease_in_out(t: f32) -> f32 {
    EasingCurve::new(0.0, 1.0, EaseFunction::QuadraticInOut).sample_clamped(t)
}

/// Starts a flight when the focus has moved to a target the rig isn't already
/// parked at or headed for, and keeps `is_animating` in step with the rig.
///
/// Returns `true` when a flight was launched.
pub fn follow_focus(
    rig: &mut CameraRig,
    interaction: &mut InteractionState,
    registry: &FocusRegistry,
    duration: Duration,
) -> bool {
    let focus = interaction.focus().kind();
    if focus == rig.heading() {
        return false;
    }

    let launched = rig.retarget(focus, registry.pose_for(focus), duration);
    interaction.set_animating(rig.is_transitioning());
    launched
}

pub fn drive_camera_rig(
    time: Res<Time>,
    camera_config: Res<CameraConfig>,
    registry: Res<FocusRegistry>,
    mut interaction: ResMut<InteractionState>,
    camera: Single<(&mut CameraRig, &mut PanOrbitCamera), With<OfficeCamera>>,
) {
    let (mut rig, mut pan_orbit) = camera.into_inner();

    // user orbit moves the parked camera; keep the rig on it so the next
    // flight leaves from where the visitor left it
    if pan_orbit.enabled
        && let Some(pose) = pan_orbit.current_pose()
    {
        rig.orbit(pose);
    }
    let orbit_pose = rig.pose();

    if rig.heading() != interaction.focus().kind()
        && follow_focus(
            &mut rig,
            &mut interaction,
            &registry,
            camera_config.transition_duration(),
        )
    {
        pan_orbit.disable_interpolation();
        debug!("camera flying to {:?}", rig.heading());
    }

    if rig.advance(time.delta()) == Some(RigEvent::Settled) {
        interaction.set_animating(false);
        debug!("camera settled at {:?}", rig.heading());
    }

    if rig.pose() != orbit_pose {
        pan_orbit.set_pose(rig.pose());
    }
}
