//! The office is rendered into an image and stretched over the window.
//!
//! Shrinking that image lowers the render resolution without touching the
//! window, the UI, or where things sit on screen. Picking rays for the office
//! camera are cast here, since its target is not the window the pointer is
//! over.

use bevy::camera::NormalizedRenderTarget;
use bevy::image::BevyDefault;
use bevy::picking::backend::ray::RayId;
use bevy::picking::backend::ray::RayMap;
use bevy::picking::pointer::PointerId;
use bevy::picking::pointer::PointerLocation;
use bevy::prelude::*;
use bevy::render::render_resource::Extent3d;
use bevy::render::render_resource::TextureFormat;
use bevy::window::PrimaryWindow;
use bevy::window::WindowRef;

use super::cameras::OfficeCamera;

/// Image the office camera renders into.
#[derive(Resource, Clone, Debug)]
pub struct OfficeRenderTarget(pub Handle<Image>);

impl OfficeRenderTarget {
    pub fn handle(&self) -> Handle<Image> { self.0.clone() }
}

pub fn render_target_image(size: UVec2) -> Image {
    let size = size.max(UVec2::ONE);
    Image::new_target_texture(size.x, size.y, TextureFormat::bevy_default(), None)
}

/// Backing size for `scale` of a window `physical_size` pixels big. Never
/// collapses to zero, a minimized window still gets a 1x1 target.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "window sizes are small positive pixel counts"
)]
pub fn scaled_size(physical_size: UVec2, scale: f32) -> UVec2 {
    let scaled = (physical_size.as_vec2() * scale).round();
    UVec2::new(scaled.x as u32, scaled.y as u32).max(UVec2::ONE)
}

/// Resizes the office image to `size`. Returns `true` when it changed.
pub fn resize_render_target(images: &mut Assets<Image>, target: &OfficeRenderTarget, size: UVec2) -> bool {
    let Some(current) = images.get(&target.0).map(Image::size) else {
        return false;
    };
    if current == size {
        return false;
    }
    let Some(image) = images.get_mut(&target.0) else {
        return false;
    };
    image.resize(Extent3d {
        width: size.x,
        height: size.y,
        ..default()
    });
    true
}

/// Maps a window position onto the office view, which covers the whole
/// window. `None` when the position is outside it.
pub fn view_position(window_position: Vec2, window_size: Vec2, view_size: Vec2) -> Option<Vec2> {
    if window_size.cmple(Vec2::ZERO).any() {
        return None;
    }
    let normalized = window_position / window_size;
    if normalized.cmplt(Vec2::ZERO).any() || normalized.cmpgt(Vec2::ONE).any() {
        return None;
    }
    Some(normalized * view_size)
}

pub fn cast_office_rays(
    mut ray_map: ResMut<RayMap>,
    window: Single<(Entity, &Window), With<PrimaryWindow>>,
    camera: Single<(Entity, &Camera, &GlobalTransform), With<OfficeCamera>>,
    pointers: Query<(&PointerId, &PointerLocation)>,
) {
    let (window_entity, window) = *window;
    let (camera_entity, camera, camera_transform) = *camera;
    let Some(window_ref) = WindowRef::Primary.normalize(Some(window_entity)) else {
        return;
    };
    let Some(view_size) = camera.logical_viewport_size() else {
        return;
    };

    for (&pointer, location) in &pointers {
        let Some(location) = location.location() else {
            continue;
        };
        if location.target != NormalizedRenderTarget::Window(window_ref) {
            continue;
        }
        let Some(position) = view_position(location.position, window.size(), view_size) else {
            continue;
        };
        if let Ok(ray) = camera.viewport_to_world(camera_transform, position) {
            ray_map.map.insert(RayId::new(camera_entity, pointer), ray);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_matches_the_window() {
        assert_eq!(scaled_size(UVec2::new(1280, 720), 1.0), UVec2::new(1280, 720));
    }

    #[test]
    fn half_scale_halves_both_sides() {
        assert_eq!(scaled_size(UVec2::new(1280, 720), 0.5), UVec2::new(640, 360));
    }

    #[test]
    fn minimized_window_keeps_a_target() {
        assert_eq!(scaled_size(UVec2::ZERO, 0.5), UVec2::ONE);
    }

    #[test]
    fn resize_only_reports_real_changes() {
        let mut images = Assets::<Image>::default();
        let target = OfficeRenderTarget(images.add(render_target_image(UVec2::new(64, 32))));

        assert!(!resize_render_target(&mut images, &target, UVec2::new(64, 32)));
        assert!(resize_render_target(&mut images, &target, UVec2::new(32, 16)));
        assert_eq!(images.get(&target.0).map(Image::size), Some(UVec2::new(32, 16)));
    }

    #[test]
    fn window_corners_map_to_view_corners() {
        let window = Vec2::new(1000.0, 500.0);
        let view = Vec2::new(500.0, 250.0);
        assert_eq!(view_position(Vec2::ZERO, window, view), Some(Vec2::ZERO));
        assert_eq!(view_position(window, window, view), Some(view));
        assert_eq!(
            view_position(Vec2::new(250.0, 125.0), window, view),
            Some(Vec2::new(125.0, 62.5))
        );
    }

    #[test]
    fn positions_off_the_view_cast_nothing() {
        let window = Vec2::new(1000.0, 500.0);
        assert_eq!(view_position(Vec2::new(-1.0, 10.0), window, window), None);
        assert_eq!(view_position(Vec2::new(10.0, 501.0), window, window), None);
        assert_eq!(view_position(Vec2::ONE, Vec2::ZERO, window), None);
    }
}
