//! The office itself: walls, desk, and the objects a visitor can click.

use bevy::prelude::*;

use crate::asset_loader::OfficeAssets;
use crate::focus::CV_DOCUMENT_POSITION;
use crate::focus::DEGREE_FRAME_POSITION;
use crate::focus::LAPTOP_POSITION;
use crate::focus::LAPTOP_SCREEN_OFFSET;
use crate::focus::PHOTO_FRAME_POSITION;
use crate::interaction::Clickable;
use crate::interaction::InteractionState;
use crate::interaction::SceneObject;
use crate::schedule::OfficeSet;

const WALL_COLOR: Color = Color::srgb(0.878, 0.878, 0.878);
const FLOOR_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);
const LAPTOP_BASE_COLOR: Color = Color::srgb(0.173, 0.243, 0.314);
const LAPTOP_SCREEN_COLOR: Color = Color::srgb(0.204, 0.286, 0.369);
const FRAME_COLOR: Color = Color::srgb(0.35, 0.25, 0.18);
const PAPER_COLOR: Color = Color::srgb(0.97, 0.96, 0.92);

const TABLE_TRANSLATION: Vec3 = Vec3::new(0.0, -0.4, 0.8);
const TABLE_SCALE: f32 = 2.0;

const SPOT_LIGHT_POSITION: Vec3 = Vec3::new(1.8, 3.5, 2.0);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_room, spawn_clickables, spawn_lights))
            .add_systems(
                Update,
                show_selected_photo
                    .run_if(resource_changed::<InteractionState>.or(resource_changed::<OfficeAssets>))
                    .in_set(OfficeSet::Presentation),
            );
    }
}

/// Material of the picture in the wall frame; follows the selected photo.
#[derive(Component)]
struct PhotoFrameMaterial(Handle<StandardMaterial>);

fn spawn_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    office_assets: Res<OfficeAssets>,
) {
    commands.spawn((
        Name::new("Back Wall"),
        Mesh3d(meshes.add(Plane3d::new(Vec3::Z, Vec2::new(4.0, 2.0)))),
        MeshMaterial3d(materials.add(WALL_COLOR)),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::new(4.0, 2.0)))),
        MeshMaterial3d(materials.add(FLOOR_COLOR)),
        Transform::from_xyz(0.0, 0.0, 2.0),
    ));
    // renders once loaded; if the model fails the desk is just missing
    commands.spawn((
        Name::new("Table"),
        SceneRoot(office_assets.table.clone()),
        Transform::from_translation(TABLE_TRANSLATION).with_scale(Vec3::splat(TABLE_SCALE)),
    ));
}

fn spawn_clickables(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    office_assets: Res<OfficeAssets>,
) {
    let photo_material = materials.add(StandardMaterial {
        base_color_texture: office_assets.photo(0).cloned(),
        ..default()
    });
    commands.spawn((
        Name::new("Photo Frame"),
        Clickable(SceneObject::PhotoFrame),
        PhotoFrameMaterial(photo_material.clone()),
        Mesh3d(meshes.add(Cuboid::new(1.5, 1.2, 0.05))),
        MeshMaterial3d(photo_material),
        Transform::from_translation(PHOTO_FRAME_POSITION),
    ));

    commands
        .spawn((
            Name::new("Degree Frame"),
            Clickable(SceneObject::DegreeFrame),
            Mesh3d(meshes.add(Cuboid::new(0.9, 0.65, 0.04))),
            MeshMaterial3d(materials.add(FRAME_COLOR)),
            Transform::from_translation(DEGREE_FRAME_POSITION),
        ))
        .with_child((
            Mesh3d(meshes.add(Cuboid::new(0.78, 0.53, 0.01))),
            MeshMaterial3d(materials.add(PAPER_COLOR)),
            Transform::from_xyz(0.0, 0.0, 0.021),
        ));

    commands.spawn((
        Name::new("CV Document"),
        Clickable(SceneObject::CvDocument),
        Mesh3d(meshes.add(Cuboid::new(0.42, 0.005, 0.6))),
        MeshMaterial3d(materials.add(PAPER_COLOR)),
        Transform::from_translation(CV_DOCUMENT_POSITION).with_rotation(Quat::from_rotation_y(-0.2)),
    ));

    // clicks on the screen bubble up to the laptop itself
    commands
        .spawn((
            Name::new("Laptop"),
            Clickable(SceneObject::Laptop),
            Mesh3d(meshes.add(Cuboid::new(1.0, 0.05, 0.8))),
            MeshMaterial3d(materials.add(LAPTOP_BASE_COLOR)),
            Transform::from_translation(LAPTOP_POSITION),
        ))
        .with_child((
            Mesh3d(meshes.add(Cuboid::new(0.9, 0.5, 0.02))),
            MeshMaterial3d(materials.add(LAPTOP_SCREEN_COLOR)),
            Transform::from_translation(LAPTOP_SCREEN_OFFSET)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_6)),
        ));
}

fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("Photo Spot Light"),
        SpotLight {
            intensity: 400_000.0,
            range: 20.0,
            outer_angle: 0.4,
            inner_angle: 0.1,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SPOT_LIGHT_POSITION).looking_at(PHOTO_FRAME_POSITION, Vec3::Y),
    ));
    commands.spawn((
        Name::new("Room Light"),
        PointLight {
            intensity: 800_000.0,
            range: 20.0,
            ..default()
        },
        Transform::from_xyz(0.0, 3.8, 3.0),
    ));
}

fn show_selected_photo(
    interaction: Res<InteractionState>,
    office_assets: Res<OfficeAssets>,
    frame: Single<&PhotoFrameMaterial>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(photo) = office_assets.photo(interaction.photo_index()) else {
        return;
    };
    let Some(material) = materials.get_mut(&frame.0) else {
        return;
    };
    if material.base_color_texture.as_ref() != Some(photo) {
        material.base_color_texture = Some(photo.clone());
    }
}
