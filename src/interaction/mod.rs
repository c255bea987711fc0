mod clickable;
mod config;
mod constants;
mod input;
mod pointer_hint;
mod state;

use bevy::prelude::*;

use crate::asset_loader::PHOTO_PATHS;
use crate::schedule::OfficeSet;
pub use clickable::Clickable;
pub use clickable::ObjectClicked;
use config::InteractionConfig;
use config::InteractionConfigPlugin;
use input::OverlayInputPlugin;
use pointer_hint::PointerHint;
pub use state::InteractionState;
pub use state::OverlayKind;
pub use state::SceneObject;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let reveal_delay = InteractionConfig::default().reveal_delay();

        app.add_plugins(InteractionConfigPlugin)
            .add_plugins(OverlayInputPlugin)
            .insert_resource(InteractionState::new(PHOTO_PATHS.len(), reveal_delay))
            .init_resource::<PointerHint>()
            .add_message::<ObjectClicked>()
            .add_message::<OverlayCommand>()
            .add_observer(clickable::on_clickable_clicked)
            .add_observer(clickable::on_clickable_over)
            .add_observer(clickable::on_clickable_out)
            .add_systems(
                Update,
                (handle_object_clicks, handle_overlay_commands, tick_reveal)
                    .chain()
                    .in_set(OfficeSet::Coordination),
            )
            .add_systems(
                Update,
                pointer_hint::apply_pointer_hint
                    .run_if(resource_changed::<PointerHint>)
                    .in_set(OfficeSet::Presentation),
            );
    }
}

/// Requests raised by overlay buttons and keyboard shortcuts.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayCommand {
    Close,
    NextPhoto,
    PreviousPhoto,
}

fn handle_object_clicks(
    mut clicks: MessageReader<ObjectClicked>,
    mut interaction: ResMut<InteractionState>,
) {
    // last click in a frame wins, same as across frames
    for ObjectClicked(object) in clicks.read() {
        if interaction.on_object_clicked(*object) {
            info!("focus -> {:?}", interaction.focus());
        } else {
            debug!("{object:?} already focused");
        }
    }
}

fn handle_overlay_commands(
    mut commands: MessageReader<OverlayCommand>,
    mut interaction: ResMut<InteractionState>,
) {
    for command in commands.read() {
        let applied = match command {
            OverlayCommand::Close => interaction.on_overlay_close(),
            OverlayCommand::NextPhoto => interaction.on_photo_next(),
            OverlayCommand::PreviousPhoto => interaction.on_photo_prev(),
        };
        if applied {
            info!("{command:?}: focus -> {:?}", interaction.focus());
        }
    }
}

fn tick_reveal(time: Res<Time>, mut interaction: ResMut<InteractionState>) {
    if !interaction.reveal_pending() {
        return;
    }
    if let Some(overlay) = interaction.tick(time.delta()) {
        info!("revealing {overlay:?}");
    }
}
