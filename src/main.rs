//! Virtual Office - a portfolio you walk through in 3D, built with Bevy
//!
//! Clicking objects in the office flies the camera to them and opens a panel:
//! - the photo frame opens a photo viewer
//! - the degree opens the thesis, the CV on the desk opens the CV
//! - the laptop opens the contact panel
//!
//! Render resolution adapts to the frame rate. Bevy Remote Protocol (BRP) is
//! enabled for debugging.

mod asset_loader;
mod camera;
mod focus;
mod interaction;
mod overlay;
mod resolution;
mod scene;
mod schedule;

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::asset_loader::AssetLoaderPlugin;
use crate::camera::CameraPlugin;
use crate::focus::FocusPlugin;
use crate::interaction::InteractionPlugin;
use crate::overlay::OverlayPlugin;
use crate::resolution::ResolutionPlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;

fn main() {
    let mut app = App::new();

    // Get effective port from BrpExtrasPlugin to include in window title if non-default
    let brp_plugin = BrpExtrasPlugin::default();
    let (effective_port, _) = brp_plugin.get_effective_port();
    let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
        "Virtual Office".to_string()
    } else {
        format!("Virtual Office - {effective_port}")
    };

    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            ..default()
        }),
        ..default()
    }));

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            // the page owns layout; the canvas fills whatever it is given
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins((
        EguiPlugin::default(),
        MeshPickingPlugin,
        brp_plugin,
        AssetLoaderPlugin,
        CameraPlugin,
        FocusPlugin,
        InteractionPlugin,
        OverlayPlugin,
        ResolutionPlugin,
        ScenePlugin,
        SchedulePlugin,
    ))
    .run();
}
