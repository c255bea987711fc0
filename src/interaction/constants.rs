/// Time from clicking the degree or the CV until its document overlay opens.
/// Deliberately independent of the camera flight duration.
pub const REVEAL_DELAY_MS: f32 = 1000.0;
