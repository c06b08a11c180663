use super::constants::{
    NAV_AUTOHIDE_AFTER_PX, NAV_DESKTOP_MIN_WIDTH_PX, NAV_SOLID_AFTER_PX,
    SECTION_ACTIVATION_OFFSET_PX,
};

pub const NAV_BLUR: &str = "blur(20px)";

#[inline]
pub fn nav_background(scroll_y: f64) -> &'static str {
    if scroll_y > NAV_SOLID_AFTER_PX {
        "rgba(17, 17, 24, 0.95)"
    } else {
        "rgba(17, 17, 24, 0.8)"
    }
}

/// Hide the bar while scrolling down far enough; the desktop bar is centred
/// with a horizontal translate that must be kept.
pub fn nav_transform(scroll_y: f64, last_scroll_y: f64, viewport_width: f64) -> &'static str {
    let hide = scroll_y > last_scroll_y && scroll_y > NAV_AUTOHIDE_AFTER_PX;
    let desktop = viewport_width > NAV_DESKTOP_MIN_WIDTH_PX;
    match (hide, desktop) {
        (true, true) => "translateX(-50%) translateY(-100%)",
        (true, false) => "translateY(-100%)",
        (false, true) => "translateX(-50%) translateY(0)",
        (false, false) => "translateY(0)",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Last section (in document order) whose top, less the activation offset,
/// has been scrolled past.
pub fn active_section(scroll_y: f64, sections: &[SectionOffset]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET_PX)
        .last()
        .map(|s| s.id.as_str())
}

/// Whether a nav link href ("#about") points at the given section id.
#[inline]
pub fn link_targets_section(href: &str, section_id: Option<&str>) -> bool {
    match (href.strip_prefix('#'), section_id) {
        (Some(frag), Some(id)) => frag == id,
        _ => false,
    }
}
