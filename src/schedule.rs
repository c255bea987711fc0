use bevy::prelude::*;

/// Per-frame ordering. Pointer and keyboard observers fire in `PreUpdate`
/// and leave messages behind; the coordinator turns those into focus changes,
/// the camera follows focus, and overlays and the cursor reflect the result.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum OfficeSet {
    Coordination,
    CameraMotion,
    Presentation,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                OfficeSet::Coordination,
                OfficeSet::CameraMotion,
                OfficeSet::Presentation,
            )
                .chain(),
        );
    }
}
