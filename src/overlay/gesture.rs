// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-dismiss detection.
//!
//! Fed raw touch events for the video surface. Fires at most once per
//! gesture, as soon as the pointer has travelled further down than the
//! threshold from where it touched, with the movement mostly vertical.

/// Touch input in window coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
}

/// Recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    TopToBottom,
}

#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f32,
    origin: Option<(f32, f32)>,
    fired: bool,
}

impl SwipeDetector {
    /// `threshold` is the vertical distance in pixels.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            origin: None,
            fired: false,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn on_touch(&mut self, event: TouchEvent) -> Option<Swipe> {
        match event {
            TouchEvent::Down { x, y } => {
                self.origin = Some((x, y));
                self.fired = false;
                None
            }
            TouchEvent::Move { x, y } => self.check(x, y),
            TouchEvent::Up { x, y } => {
                let swipe = self.check(x, y);
                self.origin = None;
                swipe
            }
            TouchEvent::Cancel => {
                self.origin = None;
                None
            }
        }
    }

    fn check(&mut self, x: f32, y: f32) -> Option<Swipe> {
        let (origin_x, origin_y) = self.origin?;
        if self.fired {
            return None;
        }
        let dy = y - origin_y;
        let dx = (x - origin_x).abs();
        if dy > self.threshold && dy > dx {
            self.fired = true;
            return Some(Swipe::TopToBottom);
        }
        None
    }
}
