//! Coarse (section, stage) labels derived from scroll progress.
//!
//! Structurally the same cursor-splitting as the camera driver, but on a
//! fixed `sections x stages` grid so the overlay can label the walkthrough
//! without re-deriving camera state. Kept numerically consistent with the
//! keyframe table: `total_steps()` equals the keyframe count.

use crate::constants::{SECTION_COUNT, STAGES_PER_SECTION};
use crate::driver::sanitize_progress;

/// One room of the house as shown in the overlay.
#[derive(Clone, Copy, Debug)]
pub struct SectionInfo {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECTIONS: [SectionInfo; SECTION_COUNT] = [
    SectionInfo {
        title: "Welcome",
        description: "Start your journey",
    },
    SectionInfo {
        title: "About Me",
        description: "Learn about my background",
    },
    SectionInfo {
        title: "Projects",
        description: "Explore my work",
    },
    SectionInfo {
        title: "Skills",
        description: "View my technical skills",
    },
    SectionInfo {
        title: "Contact",
        description: "Get in touch",
    },
];

pub const STAGE_LABELS: [&str; STAGES_PER_SECTION] = ["Overview", "Focus", "Detail"];

/// Derived per-frame pair: which room, and which zoom stage within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionStage {
    pub section: usize,
    pub stage: usize,
}

/// Edge-triggered tracker for the current (section, stage) pair.
pub struct SectionTracker {
    sections: usize,
    stages_per_section: usize,
    last: Option<SectionStage>,
}

impl SectionTracker {
    /// Counts are clamped to at least 1 so the grid arithmetic stays total.
    pub fn new(sections: usize, stages_per_section: usize) -> Self {
        Self {
            sections: sections.max(1),
            stages_per_section: stages_per_section.max(1),
            last: None,
        }
    }

    /// Tracker matching the built-in house path (5 sections x 3 stages).
    pub fn house() -> Self {
        Self::new(SECTION_COUNT, STAGES_PER_SECTION)
    }

    pub fn total_steps(&self) -> usize {
        self.sections * self.stages_per_section
    }

    pub fn section_count(&self) -> usize {
        self.sections
    }

    /// Pure derivation of the pair for a scroll offset.
    pub fn sample(&self, progress: f32) -> SectionStage {
        let total = self.total_steps();
        let step = (sanitize_progress(progress) * total as f32).floor() as usize;
        let step = step.min(total - 1);
        SectionStage {
            section: step / self.stages_per_section,
            stage: step % self.stages_per_section,
        }
    }

    /// Sample and report the pair only when it changed since the last
    /// emission, so dependent UI is not rewritten every frame.
    pub fn observe(&mut self, progress: f32) -> Option<SectionStage> {
        let next = self.sample(progress);
        if self.last == Some(next) {
            None
        } else {
            self.last = Some(next);
            Some(next)
        }
    }

    /// Last emitted pair, if any frame has been observed yet.
    pub fn current(&self) -> Option<SectionStage> {
        self.last
    }

    /// Scroll offset that lands exactly on the first stage of a section.
    /// Used by navigation controls; out-of-range sections clamp to the
    /// last one.
    pub fn jump_target(&self, section: usize) -> f32 {
        let section = section.min(self.sections - 1);
        (section * self.stages_per_section) as f32 / self.total_steps() as f32
    }
}
