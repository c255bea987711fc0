//! UI panels over the office scene.
//!
//! A panel never decides for itself whether it is open: visibility is read
//! straight from [`InteractionState`] whenever it changes. Panel contents are
//! placeholders; the core only opens and closes them.

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::asset_loader::OfficeAssets;
use crate::focus::FocusTarget;
use crate::interaction::InteractionState;
use crate::interaction::OverlayCommand;
use crate::interaction::OverlayKind;
use crate::schedule::OfficeSet;

const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const BUTTON_BACKGROUND: Color = Color::WHITE;
const BUTTON_TEXT: Color = Color::BLACK;
const TITLE_FONT_SIZE: f32 = 32.0;
const BODY_FONT_SIZE: f32 = 18.0;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_overlays, spawn_welcome))
            .add_observer(on_overlay_button)
            .add_observer(on_welcome_dismissed)
            .add_systems(
                Update,
                (sync_overlay_visibility, sync_photo_viewer, dismiss_welcome)
                    .run_if(resource_changed::<InteractionState>)
                    .in_set(OfficeSet::Presentation),
            );
    }
}

/// Root node of an overlay panel.
#[derive(Component, Reflect, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct OverlayPanel(pub OverlayKind);

/// A button that sends `OverlayCommand` when clicked.
#[derive(Component, Clone, Copy, Debug)]
struct OverlayButton(OverlayCommand);

#[derive(Component)]
struct PhotoViewerImage;

#[derive(Component)]
struct PhotoCounter;

#[derive(Component)]
struct WelcomeOverlay;

#[derive(Component)]
struct WelcomeButton;

impl OverlayKind {
    const fn title(self) -> &'static str {
        match self {
            Self::Photo => "Photos",
            Self::Thesis => "Master's Thesis",
            Self::CvViewer => "Curriculum Vitae",
            Self::Website => "Get in Touch",
        }
    }

    /// The photo viewer floats over the scene and lets clicks through to it
    /// everywhere except its buttons. The rest are opaque documents.
    const fn passes_clicks_through(self) -> bool { matches!(self, Self::Photo) }
}

fn overlay_root(kind: OverlayKind) -> impl Bundle {
    (
        Name::new(format!("{kind:?} Overlay")),
        OverlayPanel(kind),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Val::Px(16.0),
            ..default()
        },
        BackgroundColor(PANEL_BACKGROUND),
        Visibility::Hidden,
        GlobalZIndex(10),
    )
}

fn button(label: &str, command: OverlayCommand) -> impl Bundle {
    (
        Button,
        OverlayButton(command),
        Node {
            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(BUTTON_BACKGROUND),
        children![(
            Text::new(label),
            TextColor(BUTTON_TEXT),
            TextFont {
                font_size: BODY_FONT_SIZE,
                ..default()
            },
            Pickable::IGNORE,
        )],
    )
}

fn text(value: impl Into<String>, font_size: f32) -> impl Bundle {
    (
        Text::new(value),
        TextColor(Color::WHITE),
        TextFont {
            font_size,
            ..default()
        },
        Pickable::IGNORE,
    )
}

fn spawn_overlays(mut commands: Commands) {
    for kind in OverlayKind::ALL {
        let mut root = commands.spawn(overlay_root(kind));
        if kind.passes_clicks_through() {
            root.insert(Pickable::IGNORE);
        }

        root.with_children(|panel| {
            panel.spawn(text(kind.title(), TITLE_FONT_SIZE));
            if kind == OverlayKind::Photo {
                panel.spawn((
                    PhotoViewerImage,
                    ImageNode::default(),
                    Node {
                        max_width: Val::Percent(60.0),
                        max_height: Val::Percent(60.0),
                        ..default()
                    },
                    Pickable::IGNORE,
                ));
                panel.spawn((PhotoCounter, text("", BODY_FONT_SIZE)));
                panel
                    .spawn(Node {
                        column_gap: Val::Px(16.0),
                        ..default()
                    })
                    .insert(Pickable::IGNORE)
                    .with_children(|nav| {
                        nav.spawn(button("<", OverlayCommand::PreviousPhoto));
                        nav.spawn(button(">", OverlayCommand::NextPhoto));
                    });
            }
            panel.spawn(button("Close", OverlayCommand::Close));
        });
    }
}

fn spawn_welcome(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Welcome Overlay"),
            WelcomeOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            GlobalZIndex(20),
            // the scene stays clickable behind the greeting
            Pickable::IGNORE,
        ))
        .with_children(|welcome| {
            welcome.spawn(text("Welcome to My Work in Progress Website", TITLE_FONT_SIZE));
            welcome.spawn(text(
                "Try clicking on the photo on the wall to explore!",
                BODY_FONT_SIZE,
            ));
            welcome.spawn((
                Button,
                WelcomeButton,
                Node {
                    padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                    ..default()
                },
                BackgroundColor(BUTTON_BACKGROUND),
                children![(
                    Text::new("Got it!"),
                    TextColor(BUTTON_TEXT),
                    Pickable::IGNORE,
                )],
            ));
        });
}

fn on_overlay_button(
    mut click: On<Pointer<Click>>,
    buttons: Query<&OverlayButton>,
    mut commands: MessageWriter<OverlayCommand>,
) {
    let Ok(button) = buttons.get(click.entity) else {
        return;
    };
    click.propagate(false);
    commands.write(button.0);
}

fn on_welcome_dismissed(
    mut click: On<Pointer<Click>>,
    buttons: Query<(), With<WelcomeButton>>,
    welcome: Query<Entity, With<WelcomeOverlay>>,
    mut commands: Commands,
) {
    if !buttons.contains(click.entity) {
        return;
    }
    click.propagate(false);
    for entity in &welcome {
        commands.entity(entity).despawn();
    }
}

/// The greeting goes away for good the first time the visitor leaves home.
fn dismiss_welcome(
    interaction: Res<InteractionState>,
    welcome: Query<Entity, With<WelcomeOverlay>>,
    mut commands: Commands,
) {
    if interaction.focus().is_home() {
        return;
    }
    for entity in &welcome {
        commands.entity(entity).despawn();
    }
}

fn sync_overlay_visibility(
    interaction: Res<InteractionState>,
    mut panels: Query<(&OverlayPanel, &mut Visibility)>,
) {
    for (panel, mut visibility) in &mut panels {
        let wanted = if interaction.overlay_visible(panel.0) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}

fn sync_photo_viewer(
    interaction: Res<InteractionState>,
    office_assets: Res<OfficeAssets>,
    mut images: Query<&mut ImageNode, With<PhotoViewerImage>>,
    mut counters: Query<&mut Text, With<PhotoCounter>>,
) {
    let FocusTarget::Photo(index) = interaction.focus() else {
        return;
    };

    if let Some(photo) = office_assets.photo(index) {
        for mut image in &mut images {
            if image.image != *photo {
                image.image = photo.clone();
            }
        }
    }

    let label = format!("{} / {}", index + 1, interaction.photo_count());
    for mut counter in &mut counters {
        if counter.0 != label {
            counter.0.clone_from(&label);
        }
    }
}
