pub mod color;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod form;
pub mod nav;
pub mod notify;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod typing;

pub use constants::*;

// Notification and field-validation rules injected into <head> at startup
pub static NOTIFICATION_CSS: &str = include_str!("../../assets/notifications.css");
