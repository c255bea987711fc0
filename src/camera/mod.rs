mod cameras;
mod config;
mod constants;
mod motion;
mod orbit;
mod pan_orbit_ext;
mod render_target;

use bevy::picking::PickingSystems;
use bevy::picking::backend::ray::RayMap;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

use crate::schedule::OfficeSet;
pub use config::CameraConfig;
use config::CameraConfigPlugin;
pub use render_target::OfficeRenderTarget;
pub use render_target::resize_render_target;
pub use render_target::scaled_size;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraConfigPlugin, PanOrbitCameraPlugin))
            .add_systems(
                Startup,
                (cameras::spawn_office_camera, cameras::spawn_display_camera).chain(),
            )
            .add_systems(
                PreUpdate,
                render_target::cast_office_rays
                    .in_set(PickingSystems::ProcessInput)
                    .after(RayMap::repopulate),
            )
            .add_systems(
                Update,
                cameras::update_clear_color.run_if(resource_changed::<CameraConfig>),
            )
            .add_systems(
                Update,
                (
                    orbit::route_orbit_input,
                    motion::drive_camera_rig,
                    // after the rig, so a flight launched this frame already
                    // locks out orbit input
                    orbit::gate_orbit_controls,
                )
                    .chain()
                    .in_set(OfficeSet::CameraMotion),
            );
    }
}
