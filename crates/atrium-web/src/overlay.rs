//! DOM overlay updates: section label, nav dots, stage dots, progress bar.
//!
//! The overlay elements live in index.html; everything here mutates them
//! by id. Section-level updates are driven edge-triggered from the
//! tracker, the progress bar tracks the offset every frame.

use atrium_core::{SectionStage, SECTIONS, SECTION_COUNT, STAGES_PER_SECTION, STAGE_LABELS};
use web_sys as web;

use crate::dom;

/// Rewrite the section-dependent parts of the overlay.
pub fn set_section(document: &web::Document, pair: SectionStage) {
    if let Some(info) = SECTIONS.get(pair.section) {
        dom::set_text_by_id(document, "section-title", info.title);
        dom::set_text_by_id(document, "section-description", info.description);
    }
    if let Some(label) = STAGE_LABELS.get(pair.stage) {
        let text = format!("Stage: {} ({}/{})", label, pair.stage + 1, STAGES_PER_SECTION);
        dom::set_text_by_id(document, "stage-label", &text);
    }
    for section in 0..SECTION_COUNT {
        set_dot_active(
            document,
            &format!("nav-dot-{section}"),
            section == pair.section,
        );
    }
    for stage in 0..STAGES_PER_SECTION {
        set_dot_active(document, &format!("stage-dot-{stage}"), stage == pair.stage);
    }
    set_hint_visible(document, pair.section == 0 && pair.stage == 0);
}

/// Progress bar width follows the normalized scroll offset.
pub fn set_progress(document: &web::Document, offset: f32) {
    if let Some(el) = document.get_element_by_id("progress-bar") {
        let _ = el.set_attribute("style", &format!("width:{:.2}%", offset * 100.0));
    }
}

fn set_dot_active(document: &web::Document, element_id: &str, active: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let classes = el.class_list();
        if active {
            let _ = classes.add_1("active");
        } else {
            let _ = classes.remove_1("active");
        }
    }
}

fn set_hint_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id("scroll-hint") {
        let _ = el.set_attribute("style", if visible { "" } else { "display:none" });
    }
}
