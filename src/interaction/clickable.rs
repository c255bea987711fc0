//! Pointer clicks on scene objects.
//!
//! Picking events bubble up the entity hierarchy, so a click on any mesh of
//! a model reaches the entity carrying [`Clickable`]. The first clickable on
//! the way up claims the click and stops it there; nothing behind or above it
//! sees it.

use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use super::SceneObject;
use super::pointer_hint::PointerHint;

#[derive(Component, Reflect, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct Clickable(pub SceneObject);

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectClicked(pub SceneObject);

pub fn on_clickable_clicked(
    mut click: On<Pointer<Click>>,
    clickables: Query<&Clickable>,
    mut clicked: MessageWriter<ObjectClicked>,
) {
    if click.button != PointerButton::Primary {
        return;
    }
    let Ok(clickable) = clickables.get(click.entity) else {
        return;
    };
    click.propagate(false);
    clicked.write(ObjectClicked(clickable.0));
}

pub fn on_clickable_over(
    mut over: On<Pointer<Over>>,
    clickables: Query<(), With<Clickable>>,
    mut hint: ResMut<PointerHint>,
) {
    if clickables.contains(over.entity) {
        over.propagate(false);
        hint.set_if_neq(PointerHint::new(true));
    }
}

pub fn on_clickable_out(
    mut out: On<Pointer<Out>>,
    clickables: Query<(), With<Clickable>>,
    mut hint: ResMut<PointerHint>,
) {
    if clickables.contains(out.entity) {
        out.propagate(false);
        hint.set_if_neq(PointerHint::new(false));
    }
}
