// Element ids, selectors and classes the page markup provides.

pub const PARTICLES_CANVAS_ID: &str = "particlesCanvas";
pub const ACCENT_PROPERTY: &str = "--accent-primary";

pub const CURSOR_DOT: &str = "[data-cursor-dot]";
pub const CURSOR_OUTLINE: &str = "[data-cursor-outline]";
pub const CURSOR_HOVER_TARGETS: &str = "a, button, [data-cursor-hover]";

pub const REVEAL: &str = ".reveal";
pub const SECTIONS: &str = "section";
pub const SECTION_AUTO_REVEAL: &str = "h2, h3, p, .project-card, .timeline-item, .skill-category";

pub const TYPING_TEXT: &str = ".typing-text";
pub const TYPING_TEXT_ATTR: &str = "data-text";
pub const TYPING_COMPLETE_CLASS: &str = "typing-complete";

pub const COUNTERS: &str = "[data-count]";
pub const COUNTER_ATTR: &str = "data-count";

pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

pub const NAV_ID: &str = "mainNav";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_LINKS: &str = ".nav-links a";
pub const NAV_SECTIONS: &str = "section[id]";
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const NO_SCROLL_CLASS: &str = "no-scroll";
pub const ACTIVE_CLASS: &str = "active";

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_FIELDS: &str = "input, textarea, select";
pub const SUBMIT_BUTTON: &str = ".btn-submit";
pub const LOADING_CLASS: &str = "loading";

pub const PARALLAX: &str = "[data-parallax]";
pub const FLOATING_CARDS: &str = ".floating-card";

pub const NOTIFICATION_CLOSE_CLASS: &str = "notification-close";

pub const CURRENT_YEAR_ID: &str = "currentYear";
pub const LOADED_CLASS: &str = "loaded";
