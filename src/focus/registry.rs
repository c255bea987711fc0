use bevy::prelude::*;

use super::FocusKind;
use super::FocusTarget;
use super::constants::*;

/// Where the camera stands and the point it looks at.
#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at:  Vec3,
}

impl CameraPose {
    pub const HOME: Self = Self::new(HOME_POSITION, HOME_LOOK_AT);

    pub const fn new(position: Vec3, look_at: Vec3) -> Self { Self { position, look_at } }

    /// Pose that views `subject` from `subject + offset`.
    pub fn viewing(subject: Vec3, offset: Vec3) -> Self { Self::new(subject + offset, subject) }

    /// Position and look-at are blended with the same factor so they always
    /// arrive together.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at:  self.look_at.lerp(other.look_at, t),
        }
    }

    pub fn approx_eq(self, other: Self, tolerance: f32) -> bool {
        self.position.abs_diff_eq(other.position, tolerance)
            && self.look_at.abs_diff_eq(other.look_at, tolerance)
    }

    pub fn distance(self) -> f32 { self.position.distance(self.look_at) }

    pub fn to_transform(self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

impl Default for CameraPose {
    fn default() -> Self { Self::HOME }
}

/// Authored camera pose for every focus target. Built once; there are no
/// mutators, so the table can't drift after startup.
#[derive(Resource, Debug, Clone)]
pub struct FocusRegistry {
    poses: [CameraPose; FocusKind::ALL.len()],
}

impl Default for FocusRegistry {
    fn default() -> Self {
        let mut poses = [CameraPose::HOME; FocusKind::ALL.len()];
        for kind in FocusKind::ALL {
            poses[kind.slot()] = authored_pose(kind);
        }
        Self { poses }
    }
}

impl FocusRegistry {
    /// Total lookup; the photo index is ignored since all photos share a pose.
    pub const fn lookup(&self, target: FocusTarget) -> CameraPose { self.pose_for(target.kind()) }

    pub const fn pose_for(&self, kind: FocusKind) -> CameraPose { self.poses[kind.slot()] }
}

fn authored_pose(kind: FocusKind) -> CameraPose {
    match kind {
        FocusKind::Home => CameraPose::HOME,
        FocusKind::Photo => CameraPose::viewing(PHOTO_FRAME_POSITION, FRAME_VIEW_OFFSET),
        FocusKind::Degree => CameraPose::viewing(DEGREE_FRAME_POSITION, DEGREE_VIEW_OFFSET),
        FocusKind::Cv => CameraPose::viewing(CV_DOCUMENT_POSITION, CV_VIEW_OFFSET),
        FocusKind::Website => CameraPose::viewing(
            LAPTOP_POSITION + LAPTOP_SCREEN_OFFSET,
            LAPTOP_VIEW_OFFSET,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_has_a_pose() {
        let registry = FocusRegistry::default();
        let targets = [
            FocusTarget::Home,
            FocusTarget::Photo(0),
            FocusTarget::Photo(7),
            FocusTarget::Degree,
            FocusTarget::Cv,
            FocusTarget::Website,
        ];
        for target in targets {
            let pose = registry.lookup(target);
            assert!(pose.position.is_finite(), "{target:?} has no usable position");
            assert!(pose.look_at.is_finite(), "{target:?} has no usable look-at");
            assert!(pose.distance() > 0.0, "{target:?} looks at its own position");
        }
    }

    #[test]
    fn only_home_sits_at_home_altitude() {
        let registry = FocusRegistry::default();
        for kind in FocusKind::ALL {
            let at_home_altitude =
                (registry.pose_for(kind).position.y - HOME_ALTITUDE).abs() < POSE_TOLERANCE;
            assert_eq!(at_home_altitude, kind == FocusKind::Home, "{kind:?}");
        }
    }

    #[test]
    fn photo_index_does_not_change_pose() {
        let registry = FocusRegistry::default();
        assert_eq!(
            registry.lookup(FocusTarget::Photo(0)),
            registry.lookup(FocusTarget::Photo(1))
        );
    }

    #[test]
    fn photo_pose_frames_the_photo() {
        let pose = FocusRegistry::default().lookup(FocusTarget::Photo(0));
        assert_eq!(pose.look_at, PHOTO_FRAME_POSITION);
        assert!(pose.position.abs_diff_eq(Vec3::new(1.8, 3.2, 2.0), POSE_TOLERANCE));
    }

    #[test]
    fn lerp_moves_position_and_look_at_together() {
        let from = CameraPose::new(Vec3::ZERO, Vec3::X);
        let to = CameraPose::new(Vec3::splat(2.0), Vec3::NEG_X);
        let mid = from.lerp(to, 0.5);
        assert_eq!(mid.position, Vec3::ONE);
        assert_eq!(mid.look_at, Vec3::ZERO);
    }
}
