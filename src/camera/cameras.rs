use bevy::camera::RenderTarget;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::AmbientLight;
use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiGlobalSettings;
use bevy_inspector_egui::bevy_egui::PrimaryEguiContext;
use bevy_panorbit_camera::PanOrbitCamera;

use super::motion::CameraRig;
use super::orbit::OrbitAngles;
use super::pan_orbit_ext::PanOrbitCameraExt;
use super::render_target::OfficeRenderTarget;
use super::render_target::render_target_image;
use crate::camera::config::CameraConfig;
use crate::focus::FocusKind;
use crate::focus::FocusRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraOrder {
    Office,
    Display,
}

impl CameraOrder {
    pub const fn order(self) -> isize {
        match self {
            Self::Office => 0,
            Self::Display => 1,
        }
    }
}

/// Marker for the camera that renders the office.
#[derive(Component, Reflect, Debug)]
#[reflect(Component)]
pub struct OfficeCamera;

pub fn spawn_office_camera(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    registry: Res<FocusRegistry>,
    camera_config: Res<CameraConfig>,
) {
    // sized for real on the first frame, once the window size is known
    let target = images.add(render_target_image(UVec2::ONE));
    commands.insert_resource(OfficeRenderTarget(target.clone()));

    let home = registry.pose_for(FocusKind::Home);
    let angles = OrbitAngles::from_pose(home);
    let mut pan_orbit = PanOrbitCamera {
        focus: angles.focus,
        yaw: Some(angles.yaw),
        pitch: Some(angles.pitch),
        radius: Some(angles.radius),
        button_orbit: MouseButton::Left,
        button_pan: MouseButton::Right,
        ..default()
    };
    // the rig is idle at home, so orbit starts enabled
    pan_orbit.configure_orbit(&camera_config);
    pan_orbit.enable_interpolation(&camera_config);

    commands
        .spawn((
            Name::new("Office Camera"),
            OfficeCamera,
            Camera3d::default(),
            Camera {
                order: CameraOrder::Office.order(),
                ..default()
            },
            RenderTarget::from(target),
            home.to_transform(),
            CameraRig::new(home, FocusKind::Home),
            pan_orbit,
        ))
        .insert(Tonemapping::TonyMcMapface)
        // soft fill so the walls never go fully black away from the spot light
        .insert(AmbientLight {
            brightness: 600.0,
            ..default()
        });
}

/// The window camera draws the office image and all UI on top of it, and
/// hosts the inspector.
pub fn spawn_display_camera(
    mut commands: Commands,
    mut egui_settings: ResMut<EguiGlobalSettings>,
    target: Res<OfficeRenderTarget>,
) {
    // egui would otherwise claim the office camera, the first one spawned
    egui_settings.auto_create_primary_context = false;
    commands.spawn((
        Name::new("Display Camera"),
        Camera2d,
        Camera {
            order: CameraOrder::Display.order(),
            ..default()
        },
        PrimaryEguiContext,
    ));

    commands.spawn((
        Name::new("Office View"),
        ImageNode::new(target.handle()),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        GlobalZIndex(-1),
        // office objects are picked through rays cast from the office camera
        Pickable::IGNORE,
    ));
}

// lets the inspector change ClearColor while the scene is running
pub fn update_clear_color(camera_config: Res<CameraConfig>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = camera_config.clear_color;
}
