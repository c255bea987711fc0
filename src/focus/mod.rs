//! What the camera is looking at, and where it stands to look at it.

mod constants;
mod registry;

use bevy::prelude::*;

pub use constants::CV_DOCUMENT_POSITION;
pub use constants::DEGREE_FRAME_POSITION;
pub use constants::LAPTOP_POSITION;
pub use constants::LAPTOP_SCREEN_OFFSET;
pub use constants::PHOTO_FRAME_POSITION;
pub use constants::POSE_TOLERANCE;
pub use registry::CameraPose;
pub use registry::FocusRegistry;

pub struct FocusPlugin;

impl Plugin for FocusPlugin {
    fn build(&self, app: &mut App) { app.init_resource::<FocusRegistry>(); }
}

/// The object the camera is oriented toward.
///
/// `Photo` carries the selected photo; every other target is fully described
/// by its discriminant.
#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    #[default]
    Home,
    Photo(usize),
    Degree,
    Cv,
    Website,
}

impl FocusTarget {
    pub const fn kind(self) -> FocusKind {
        match self {
            Self::Home => FocusKind::Home,
            Self::Photo(_) => FocusKind::Photo,
            Self::Degree => FocusKind::Degree,
            Self::Cv => FocusKind::Cv,
            Self::Website => FocusKind::Website,
        }
    }

    pub const fn is_home(self) -> bool { matches!(self, Self::Home) }

    pub const fn photo_index(self) -> Option<usize> {
        match self {
            Self::Photo(index) => Some(index),
            _ => None,
        }
    }
}

/// Fieldless projection of [`FocusTarget`]. All photos share one camera pose,
/// so this is what the registry is keyed by.
#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusKind {
    #[default]
    Home,
    Photo,
    Degree,
    Cv,
    Website,
}

impl FocusKind {
    pub const ALL: [Self; 5] = [Self::Home, Self::Photo, Self::Degree, Self::Cv, Self::Website];

    const fn slot(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Photo => 1,
            Self::Degree => 2,
            Self::Cv => 3,
            Self::Website => 4,
        }
    }
}
