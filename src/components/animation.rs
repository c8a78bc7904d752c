//! Frame playback state for a sliced sprite sheet.

use bevy_ecs::prelude::Component;

/// Millisecond-gated frame clock of an animated sprite.
///
/// The frame index wraps modulo `frame_count`, so it always addresses a
/// valid frame of the sheet row selected by the
/// [`Sprite`](crate::components::sprite::Sprite) component. A frame only
/// advances when strictly more than `frame_delay_ms` has elapsed since the
/// previous advance; otherwise it holds.
#[derive(Component, Clone, Copy, Debug)]
pub struct Animation {
    /// Current frame within the active sheet row.
    pub frame_index: usize,
    /// Frames per sheet row.
    pub frame_count: usize,
    /// Minimum milliseconds between frame advances.
    pub frame_delay_ms: u64,
    /// World-clock timestamp of the last advance, in milliseconds.
    pub last_update_ms: u64,
}

impl Animation {
    pub fn new(frame_count: usize, frame_delay_ms: u64) -> Self {
        Self {
            frame_index: 0,
            frame_count,
            frame_delay_ms,
            last_update_ms: 0,
        }
    }

    /// Advance one frame when the delay has passed, wrapping at the end of
    /// the row. `now_ms` is the world clock in milliseconds.
    pub fn advance(&mut self, now_ms: u64) {
        if self.frame_count == 0 {
            return;
        }
        if now_ms.saturating_sub(self.last_update_ms) > self.frame_delay_ms {
            self.last_update_ms = now_ms;
            self.frame_index = (self.frame_index + 1) % self.frame_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_at_exact_delay() {
        // Gating is a strict greater-than.
        let mut animation = Animation::new(6, 125);
        animation.advance(125);
        assert_eq!(animation.frame_index, 0);
        assert_eq!(animation.last_update_ms, 0);
    }

    #[test]
    fn test_advances_past_delay() {
        let mut animation = Animation::new(6, 125);
        animation.advance(126);
        assert_eq!(animation.frame_index, 1);
        assert_eq!(animation.last_update_ms, 126);
    }

    #[test]
    fn test_clock_resets_on_advance() {
        let mut animation = Animation::new(6, 125);
        animation.advance(126);
        animation.advance(200); // 74 ms since last advance: hold
        assert_eq!(animation.frame_index, 1);
        animation.advance(252);
        assert_eq!(animation.frame_index, 2);
    }

    #[test]
    fn test_wraps_before_frame_count() {
        let mut animation = Animation::new(3, 125);
        let mut now = 0;
        for expected in [1, 2, 0, 1, 2, 0] {
            now += 126;
            animation.advance(now);
            assert_eq!(animation.frame_index, expected);
            assert!(animation.frame_index < animation.frame_count);
        }
    }

    #[test]
    fn test_zero_frames_is_noop() {
        let mut animation = Animation::new(0, 125);
        animation.advance(1000);
        assert_eq!(animation.frame_index, 0);
    }
}
