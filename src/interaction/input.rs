//! Keyboard shortcuts for the overlays: arrows page through photos, escape
//! closes whatever is open.

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::OverlayCommand;

pub struct OverlayInputPlugin;

impl Plugin for OverlayInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin)
            .add_input_context::<OverlayShortcuts>()
            .add_systems(Startup, spawn_overlay_shortcuts)
            .add_observer(close_overlay)
            .add_observer(next_photo)
            .add_observer(previous_photo);
    }
}

#[derive(Component)]
struct OverlayShortcuts;

#[derive(InputAction)]
#[action_output(bool)]
struct CloseOverlay;

#[derive(InputAction)]
#[action_output(bool)]
struct NextPhoto;

#[derive(InputAction)]
#[action_output(bool)]
struct PreviousPhoto;

fn spawn_overlay_shortcuts(mut commands: Commands) {
    commands.spawn((
        Name::new("Overlay Shortcuts"),
        OverlayShortcuts,
        actions!(OverlayShortcuts[
            (Action::<CloseOverlay>::new(), bindings![KeyCode::Escape]),
            (Action::<NextPhoto>::new(), bindings![KeyCode::ArrowRight, KeyCode::KeyD]),
            (Action::<PreviousPhoto>::new(), bindings![KeyCode::ArrowLeft, KeyCode::KeyA]),
        ]),
    ));
}

fn close_overlay(_close: On<Start<CloseOverlay>>, mut commands: MessageWriter<OverlayCommand>) {
    commands.write(OverlayCommand::Close);
}

fn next_photo(_next: On<Start<NextPhoto>>, mut commands: MessageWriter<OverlayCommand>) {
    commands.write(OverlayCommand::NextPhoto);
}

fn previous_photo(_prev: On<Start<PreviousPhoto>>, mut commands: MessageWriter<OverlayCommand>) {
    commands.write(OverlayCommand::PreviousPhoto);
}
