use std::time::Duration;

use bevy::prelude::*;

use crate::focus::FocusTarget;

/// Objects in the office that respond to a click.
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneObject {
    PhotoFrame,
    DegreeFrame,
    CvDocument,
    Laptop,
}

/// Overlay panels laid over the scene.
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Photo,
    Thesis,
    CvViewer,
    Website,
}

impl OverlayKind {
    pub const ALL: [Self; 4] = [Self::Photo, Self::Thesis, Self::CvViewer, Self::Website];

    /// Full-screen documents open a beat after the click so the camera flight
    /// is seen before the panel covers the scene. These ones wait.
    const fn delayed_for(focus: FocusTarget) -> Option<Self> {
        match focus {
            FocusTarget::Degree => Some(Self::Thesis),
            FocusTarget::Cv => Some(Self::CvViewer),
            FocusTarget::Home | FocusTarget::Photo(_) | FocusTarget::Website => None,
        }
    }
}

#[derive(Reflect, Clone, Debug)]
struct PendingReveal {
    overlay: OverlayKind,
    /// Focus the reveal was scheduled for. If focus has moved on by the time
    /// the timer fires, the reveal is dropped.
    focus:   FocusTarget,
    timer:   Timer,
}

/// The single source of truth for what the visitor is looking at.
///
/// Overlay visibility is derived from this resource and never stored on the
/// panels. The camera rig only touches the `is_animating` bookkeeping.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct InteractionState {
    focus:          FocusTarget,
    is_animating:   bool,
    /// Last photo viewed; clicking the frame again resumes from it.
    photo_index:    usize,
    photo_count:    usize,
    reveal_delay:   Duration,
    pending_reveal: Option<PendingReveal>,
    revealed:       Option<OverlayKind>,
}

impl InteractionState {
    pub const fn new(photo_count: usize, reveal_delay: Duration) -> Self {
        Self {
            focus: FocusTarget::Home,
            is_animating: false,
            photo_index: 0,
            photo_count,
            reveal_delay,
            pending_reveal: None,
            revealed: None,
        }
    }

    pub const fn focus(&self) -> FocusTarget { self.focus }

    pub const fn is_animating(&self) -> bool { self.is_animating }

    pub const fn photo_index(&self) -> usize { self.photo_index }

    pub const fn photo_count(&self) -> usize { self.photo_count }

    pub const fn reveal_pending(&self) -> bool { self.pending_reveal.is_some() }

    pub(crate) const fn set_animating(&mut self, is_animating: bool) {
        self.is_animating = is_animating;
    }

    /// Takes effect for reveals scheduled after the change.
    pub const fn set_reveal_delay(&mut self, reveal_delay: Duration) {
        self.reveal_delay = reveal_delay;
    }

    pub const fn focus_for(&self, object: SceneObject) -> FocusTarget {
        match object {
            SceneObject::PhotoFrame => FocusTarget::Photo(self.photo_index),
            SceneObject::DegreeFrame => FocusTarget::Degree,
            SceneObject::CvDocument => FocusTarget::Cv,
            SceneObject::Laptop => FocusTarget::Website,
        }
    }

    /// Moves focus to the clicked object. Clicking what is already focused
    /// does nothing, so a pending reveal keeps counting down.
    pub fn on_object_clicked(&mut self, object: SceneObject) -> bool {
        let target = self.focus_for(object);
        if target == self.focus {
            return false;
        }
        self.set_focus(target);
        true
    }

    /// Returns to the home view from whichever overlay is open.
    pub fn on_overlay_close(&mut self) -> bool {
        if self.focus.is_home() {
            return false;
        }
        self.set_focus(FocusTarget::Home);
        true
    }

    pub fn on_photo_next(&mut self) -> bool { self.step_photo(1) }

    pub fn on_photo_prev(&mut self) -> bool {
        self.step_photo(self.photo_count.saturating_sub(1))
    }

    fn step_photo(&mut self, forward: usize) -> bool {
        let Some(index) = self.focus.photo_index() else {
            return false;
        };
        if self.photo_count == 0 {
            return false;
        }
        let next = (index + forward) % self.photo_count;
        self.photo_index = next;
        self.focus = FocusTarget::Photo(next);
        true
    }

    fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
        self.revealed = None;
        // any reveal still counting down belongs to the old focus
        self.pending_reveal = OverlayKind::delayed_for(target).map(|overlay| PendingReveal {
            overlay,
            focus: target,
            timer: Timer::new(self.reveal_delay, TimerMode::Once),
        });
        if let Some(index) = target.photo_index() {
            self.photo_index = index;
        }
    }

    /// Counts down a pending reveal. Returns the overlay revealed this tick.
    ///
    /// The delay is wall-clock time from the click, not tied to the camera
    /// flight finishing.
    pub fn tick(&mut self, delta: Duration) -> Option<OverlayKind> {
        let pending = self.pending_reveal.as_mut()?;
        pending.timer.tick(delta);
        if !pending.timer.is_finished() {
            return None;
        }

        let pending = self.pending_reveal.take()?;
        if pending.focus != self.focus {
            debug!("dropping stale {:?} reveal", pending.overlay);
            return None;
        }
        self.revealed = Some(pending.overlay);
        Some(pending.overlay)
    }

    pub fn overlay_visible(&self, overlay: OverlayKind) -> bool {
        match overlay {
            OverlayKind::Photo => matches!(self.focus, FocusTarget::Photo(_)),
            OverlayKind::Website => self.focus == FocusTarget::Website,
            OverlayKind::Thesis => {
                self.focus == FocusTarget::Degree && self.revealed == Some(OverlayKind::Thesis)
            },
            OverlayKind::CvViewer => {
                self.focus == FocusTarget::Cv && self.revealed == Some(OverlayKind::CvViewer)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    fn state() -> InteractionState { InteractionState::new(3, DELAY) }

    fn advance(state: &mut InteractionState, total: Duration) {
        let step = Duration::from_millis(10);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            state.tick(step);
            elapsed += step;
        }
    }

    fn visible(state: &InteractionState) -> Vec<OverlayKind> {
        OverlayKind::ALL
            .into_iter()
            .filter(|overlay| state.overlay_visible(*overlay))
            .collect()
    }

    #[test]
    fn starts_at_home_with_nothing_open() {
        let state = state();
        assert_eq!(state.focus(), FocusTarget::Home);
        assert!(!state.is_animating());
        assert!(visible(&state).is_empty());
    }

    #[test]
    fn clicks_map_to_their_targets() {
        let cases = [
            (SceneObject::PhotoFrame, FocusTarget::Photo(0)),
            (SceneObject::DegreeFrame, FocusTarget::Degree),
            (SceneObject::CvDocument, FocusTarget::Cv),
            (SceneObject::Laptop, FocusTarget::Website),
        ];
        for (object, expected) in cases {
            let mut state = state();
            assert!(state.on_object_clicked(object));
            assert_eq!(state.focus(), expected, "{object:?}");
        }
    }

    #[test]
    fn photo_and_website_overlays_open_immediately() {
        let mut state = state();
        state.on_object_clicked(SceneObject::PhotoFrame);
        assert_eq!(visible(&state), vec![OverlayKind::Photo]);

        let mut state = self::state();
        state.on_object_clicked(SceneObject::Laptop);
        assert_eq!(visible(&state), vec![OverlayKind::Website]);
    }

    #[test]
    fn thesis_waits_for_the_reveal_delay() {
        let mut state = state();
        state.on_object_clicked(SceneObject::PhotoFrame);
        state.on_object_clicked(SceneObject::DegreeFrame);
        assert_eq!(state.focus(), FocusTarget::Degree);
        assert!(visible(&state).is_empty(), "photo overlay should close at once");

        advance(&mut state, Duration::from_millis(990));
        assert!(!state.overlay_visible(OverlayKind::Thesis));

        advance(&mut state, Duration::from_millis(10));
        assert_eq!(visible(&state), vec![OverlayKind::Thesis]);
    }

    #[test]
    fn cv_viewer_waits_for_the_reveal_delay() {
        let mut state = state();
        state.on_object_clicked(SceneObject::CvDocument);
        assert_eq!(state.tick(Duration::from_millis(999)), None);
        assert_eq!(state.tick(Duration::from_millis(1)), Some(OverlayKind::CvViewer));
        assert!(state.overlay_visible(OverlayKind::CvViewer));
    }

    #[test]
    fn reveal_delay_is_fixed_not_tied_to_camera() {
        // the camera may still be flying, or long landed; only the clock counts
        let mut state = state();
        state.on_object_clicked(SceneObject::DegreeFrame);
        state.set_animating(true);
        assert_eq!(state.tick(DELAY), Some(OverlayKind::Thesis));
        assert!(state.is_animating());
    }

    #[test]
    fn closing_before_the_delay_cancels_the_reveal() {
        let mut state = state();
        state.on_object_clicked(SceneObject::DegreeFrame);
        advance(&mut state, Duration::from_millis(500));
        assert!(state.on_overlay_close());
        assert!(!state.reveal_pending());

        advance(&mut state, Duration::from_millis(2000));
        assert_eq!(state.focus(), FocusTarget::Home);
        assert!(visible(&state).is_empty());
    }

    #[test]
    fn switching_focus_cancels_the_reveal() {
        let mut state = state();
        state.on_object_clicked(SceneObject::DegreeFrame);
        advance(&mut state, Duration::from_millis(600));
        state.on_object_clicked(SceneObject::Laptop);
        advance(&mut state, Duration::from_millis(2000));
        assert_eq!(visible(&state), vec![OverlayKind::Website]);
    }

    #[test]
    fn switching_between_delayed_overlays_restarts_the_clock() {
        let mut state = state();
        state.on_object_clicked(SceneObject::DegreeFrame);
        advance(&mut state, Duration::from_millis(600));
        state.on_object_clicked(SceneObject::CvDocument);
        advance(&mut state, Duration::from_millis(600));
        assert!(visible(&state).is_empty(), "cv viewer opened on the thesis timer");

        advance(&mut state, Duration::from_millis(400));
        assert_eq!(visible(&state), vec![OverlayKind::CvViewer]);
    }

    #[test]
    fn clicking_focused_object_does_not_restart_the_timer() {
        let mut state = state();
        state.on_object_clicked(SceneObject::DegreeFrame);
        advance(&mut state, Duration::from_millis(700));
        assert!(!state.on_object_clicked(SceneObject::DegreeFrame));
        advance(&mut state, Duration::from_millis(300));
        assert!(state.overlay_visible(OverlayKind::Thesis));
    }

    #[test]
    fn clicking_revealed_object_keeps_it_open() {
        let mut state = state();
        state.on_object_clicked(SceneObject::CvDocument);
        advance(&mut state, DELAY);
        assert!(!state.on_object_clicked(SceneObject::CvDocument));
        assert!(state.overlay_visible(OverlayKind::CvViewer));
    }

    #[test]
    fn close_always_returns_home() {
        for object in [
            SceneObject::PhotoFrame,
            SceneObject::DegreeFrame,
            SceneObject::CvDocument,
            SceneObject::Laptop,
        ] {
            let mut state = state();
            state.on_object_clicked(object);
            advance(&mut state, DELAY);
            assert!(state.on_overlay_close());
            assert_eq!(state.focus(), FocusTarget::Home, "{object:?}");
            assert!(visible(&state).is_empty(), "{object:?}");
        }
    }

    #[test]
    fn close_at_home_is_a_no_op() {
        let mut state = state();
        assert!(!state.on_overlay_close());
        assert_eq!(state.focus(), FocusTarget::Home);
    }

    #[test]
    fn photo_navigation_wraps_both_ways() {
        let mut state = state();
        state.on_object_clicked(SceneObject::PhotoFrame);

        assert!(state.on_photo_prev());
        assert_eq!(state.focus(), FocusTarget::Photo(2));
        assert!(state.on_photo_next());
        assert_eq!(state.focus(), FocusTarget::Photo(0));
        state.on_photo_next();
        state.on_photo_next();
        assert!(state.on_photo_next());
        assert_eq!(state.focus(), FocusTarget::Photo(0));
    }

    #[test]
    fn photo_navigation_outside_photo_focus_is_a_no_op() {
        let mut state = state();
        assert!(!state.on_photo_next());
        assert!(!state.on_photo_prev());
        assert_eq!(state.focus(), FocusTarget::Home);

        state.on_object_clicked(SceneObject::Laptop);
        assert!(!state.on_photo_next());
        assert_eq!(state.focus(), FocusTarget::Website);
    }

    #[test]
    fn photo_navigation_without_photos_is_a_no_op() {
        let mut state = InteractionState::new(0, DELAY);
        state.on_object_clicked(SceneObject::PhotoFrame);
        assert!(!state.on_photo_next());
        assert!(!state.on_photo_prev());
        assert_eq!(state.focus(), FocusTarget::Photo(0));
    }

    #[test]
    fn photo_frame_resumes_last_viewed_photo() {
        let mut state = state();
        state.on_object_clicked(SceneObject::PhotoFrame);
        state.on_photo_next();
        state.on_overlay_close();
        assert_eq!(state.photo_index(), 1);

        state.on_object_clicked(SceneObject::PhotoFrame);
        assert_eq!(state.focus(), FocusTarget::Photo(1));
    }

    #[test]
    fn clicking_frame_while_viewing_photo_is_a_no_op() {
        let mut state = state();
        state.on_object_clicked(SceneObject::PhotoFrame);
        state.on_photo_next();
        assert!(!state.on_object_clicked(SceneObject::PhotoFrame));
        assert_eq!(state.focus(), FocusTarget::Photo(1));
    }

    #[test]
    fn new_delay_applies_to_later_reveals() {
        let mut state = state();
        state.set_reveal_delay(Duration::from_millis(200));
        state.on_object_clicked(SceneObject::DegreeFrame);
        assert_eq!(state.tick(Duration::from_millis(200)), Some(OverlayKind::Thesis));
    }
}
