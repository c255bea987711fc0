use std::time::Duration;

use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::InteractionState;
use super::constants::REVEAL_DELAY_MS;

pub struct InteractionConfigPlugin;

impl Plugin for InteractionConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<InteractionConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F2)),
        )
        .init_resource::<InteractionConfig>()
        .add_systems(
            Update,
            apply_interaction_config.run_if(resource_changed::<InteractionConfig>),
        );
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct InteractionConfig {
    /// Delay before the thesis and CV documents open, in milliseconds.
    #[inspector(min = 0.0, max = 3000.0, display = NumberDisplay::Slider)]
    pub reveal_delay_ms: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: REVEAL_DELAY_MS,
        }
    }
}

impl InteractionConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_secs_f32(self.reveal_delay_ms.max(0.0) / 1000.0)
    }
}

fn apply_interaction_config(
    config: Res<InteractionConfig>,
    mut interaction: ResMut<InteractionState>,
) {
    interaction.set_reveal_delay(config.reveal_delay());
}
