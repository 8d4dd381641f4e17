// SPDX-License-Identifier: MPL-2.0
//! PiP window aspect ratio.

use crate::domain::video::VideoSize;
use std::fmt;

/// A reduced `width:height` ratio.
///
/// Both terms are always non-zero and coprime.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// 16:9, used until the video reports its dimensions.
    pub const WIDESCREEN: Self = Self {
        width: 16,
        height: 9,
    };

    /// Creates a reduced ratio. Returns `None` if either term is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let divisor = gcd(width, height);
        Some(Self {
            width: width / divisor,
            height: height / divisor,
        })
    }

    /// Ratio for the PiP window of a video, falling back to 16:9 while the
    /// size is unknown.
    #[must_use]
    pub fn for_video(size: VideoSize) -> Self {
        if !size.is_known() {
            return Self::WIDESCREEN;
        }
        Self::new(size.width, size.height).unwrap_or(Self::WIDESCREEN)
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

impl fmt::Debug for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AspectRatio({}:{})", self.width, self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
