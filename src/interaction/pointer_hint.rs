//! Hover feedback: the cursor turns into a pointer over anything clickable.
//! Observers only flip [`PointerHint`]; the window cursor is touched in one
//! place.

use bevy::prelude::*;
use bevy::window::CursorIcon;
use bevy::window::PrimaryWindow;
use bevy::window::SystemCursorIcon;

#[derive(Resource, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct PointerHint {
    active: bool,
}

impl PointerHint {
    pub const fn new(active: bool) -> Self { Self { active } }

    pub const fn is_active(self) -> bool { self.active }
}

pub fn apply_pointer_hint(
    mut commands: Commands,
    hint: Res<PointerHint>,
    window: Single<Entity, With<PrimaryWindow>>,
) {
    let icon = if hint.is_active() {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    };
    commands.entity(*window).insert(CursorIcon::from(icon));
}
