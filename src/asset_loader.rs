// load every asset once, up front, into one explicit cache
use bevy::asset::LoadState;
use bevy::asset::UntypedAssetId;
use bevy::dev_tools::states::log_transitions;
use bevy::prelude::*;

/// Photos shown in the frame on the wall, in viewing order.
pub const PHOTO_PATHS: [&str; 2] = ["photos/1690_24.jpg", "photos/1691_16.jpg"];

const TABLE_MODEL_PATH: &str = "models/Table.glb#Scene0";

pub struct AssetLoaderPlugin;

impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetsState>() // necessary to tell if they've finished loading
            .init_resource::<OfficeAssets>()
            // the scene spawns in Startup and needs the handles, so load in PreStartup
            .add_systems(PreStartup, load_assets)
            .add_systems(
                Update,
                check_asset_loading.run_if(in_state(AssetsState::Loading)),
            )
            .add_systems(Update, log_transitions::<AssetsState>);
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AssetsState {
    #[default]
    Loading,
    Loaded,
}

/// Handles for everything the office loads from disk. Owned by the app for
/// its whole lifetime; nothing else keeps a private cache.
#[derive(Resource, Clone, Debug, Default)]
pub struct OfficeAssets {
    pub table:  Handle<Scene>,
    pub photos: Vec<Handle<Image>>,
}

impl OfficeAssets {
    /// Photo for `index`, wrapping like the photo viewer does.
    pub fn photo(&self, index: usize) -> Option<&Handle<Image>> {
        if self.photos.is_empty() {
            return None;
        }
        self.photos.get(index % self.photos.len())
    }

    fn ids(&self) -> impl Iterator<Item = (UntypedAssetId, &'static str)> + '_ {
        std::iter::once((self.table.id().untyped(), TABLE_MODEL_PATH)).chain(
            self.photos
                .iter()
                .zip(PHOTO_PATHS)
                .map(|(photo, path)| (photo.id().untyped(), path)),
        )
    }
}

pub fn load_assets(mut office_assets: ResMut<OfficeAssets>, asset_server: Res<AssetServer>) {
    *office_assets = OfficeAssets {
        table:  asset_server.load(TABLE_MODEL_PATH),
        photos: PHOTO_PATHS
            .iter()
            .map(|path| asset_server.load(*path))
            .collect(),
    };
}

/// Waits until every asset has either loaded or failed. A failed asset is
/// logged and left out; the objects that use it simply don't render.
pub fn check_asset_loading(
    mut next_state: ResMut<NextState<AssetsState>>,
    asset_server: Res<AssetServer>,
    office_assets: Res<OfficeAssets>,
) {
    let mut all_settled = true;
    let mut failed = Vec::new();

    for (id, path) in office_assets.ids() {
        match asset_server.get_load_state(id) {
            Some(LoadState::Loaded) => {},
            Some(LoadState::Failed(error)) => failed.push((path, error)),
            _ => all_settled = false,
        }
    }

    if !all_settled {
        return;
    }

    for (path, error) in &failed {
        warn!("failed to load {path}: {error}");
    }
    if failed.is_empty() {
        info!("All assets loaded!");
    }
    next_state.set(AssetsState::Loaded);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_lookup_wraps() {
        let assets = OfficeAssets {
            photos: vec![Handle::default(), Handle::default()],
            ..default()
        };
        assert!(assets.photo(0).is_some());
        assert!(assets.photo(3).is_some());
    }

    #[test]
    fn photo_lookup_without_photos() {
        assert!(OfficeAssets::default().photo(0).is_none());
    }
}
