//! The camera path: an ordered, immutable table of keyframes.
//!
//! Order is the traversal order through the house; the scroll driver walks
//! the table front to back as the viewer scrolls. The table is fixed at
//! construction and validated once, so the per-frame path stays fallible
//! only at the boundary.

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("camera path needs at least 2 keyframes, got {0}")]
    TooShort(usize),
    #[error("keyframe {index} out of range (path has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("keyframe {index} has invalid zoom {zoom}")]
    InvalidZoom { index: usize, zoom: f32 },
}

/// A single camera pose anchored to a point along the scroll path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub position: Vec3,
    pub target: Vec3,
    pub zoom: f32,
}

/// Ordered camera path, 5 sections x 3 zoom stages in the built-in layout.
/// Each entry: (position, look-at target, zoom).
pub const HOUSE_PATH: [([f32; 3], [f32; 3], f32); 15] = [
    // Entrance: pull in on the title wall
    ([-60.0, 4.0, 12.0], [-50.0, 3.0, 0.0], 0.8), // far entrance view
    ([-50.0, 3.0, 8.0], [-50.0, 3.0, 0.0], 1.2),  // medium zoom on the title
    ([-45.0, 3.0, 5.0], [-50.0, 3.0, 0.0], 1.8),  // close zoom on the text
    // About room
    ([-35.0, 4.0, 10.0], [-30.0, 2.0, 0.0], 0.9), // room overview
    ([-30.0, 3.0, 6.0], [-30.0, 2.0, -3.0], 1.5), // profile focus
    ([-28.0, 2.5, 3.0], [-30.0, 2.0, -8.0], 2.2), // close detail
    // Projects room
    ([-15.0, 4.0, 10.0], [-10.0, 2.0, 0.0], 0.9), // room overview
    ([-10.0, 3.0, 6.0], [-10.0, 2.0, -6.0], 1.6), // gallery focus
    ([-8.0, 2.5, 3.0], [-10.0, 2.0, -8.0], 2.4),  // single project detail
    // Skills room: sweep across the two card walls
    ([5.0, 4.0, 10.0], [10.0, 2.0, 0.0], 0.9), // room overview
    ([6.0, 3.0, 5.0], [6.0, 2.0, -6.0], 1.8),  // frontend card
    ([14.0, 3.0, 5.0], [14.0, 2.0, -6.0], 1.8), // backend card
    // Contact room
    ([25.0, 4.0, 10.0], [30.0, 2.0, 0.0], 0.9), // room overview
    ([30.0, 3.0, 6.0], [30.0, 2.0, -4.0], 1.7), // QR code focus
    ([32.0, 2.5, 3.0], [30.0, 2.0, -8.0], 2.5), // close QR detail
];

/// Immutable, ordered camera path. Invariant: at least two keyframes.
#[derive(Clone, Debug)]
pub struct KeyframeTable {
    frames: Vec<Keyframe>,
}

impl KeyframeTable {
    pub fn new(frames: Vec<Keyframe>) -> Result<Self, PathError> {
        if frames.len() < 2 {
            return Err(PathError::TooShort(frames.len()));
        }
        for (index, frame) in frames.iter().enumerate() {
            if !frame.zoom.is_finite() || frame.zoom <= 0.0 {
                return Err(PathError::InvalidZoom {
                    index,
                    zoom: frame.zoom,
                });
            }
        }
        Ok(Self { frames })
    }

    /// The built-in walkthrough path. Statically known-good, so this never
    /// goes through the fallible constructor.
    pub fn house_path() -> Self {
        let frames = HOUSE_PATH
            .iter()
            .map(|&(position, target, zoom)| Keyframe {
                position: Vec3::from(position),
                target: Vec3::from(target),
                zoom,
            })
            .collect();
        Self { frames }
    }

    pub fn get(&self, index: usize) -> Result<&Keyframe, PathError> {
        self.frames.get(index).ok_or(PathError::OutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.frames.len()
    }

    /// Number of interpolation segments (`count() - 1`).
    pub fn segments(&self) -> usize {
        self.frames.len() - 1
    }

    /// First keyframe; infallible by the length invariant.
    pub fn first(&self) -> &Keyframe {
        &self.frames[0]
    }

    /// Last keyframe; infallible by the length invariant.
    pub fn last(&self) -> &Keyframe {
        &self.frames[self.frames.len() - 1]
    }
}
