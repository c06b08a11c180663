pub mod chrome;
pub mod counters;
pub mod cursor;
pub mod form;
pub mod nav;
pub mod notify;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod typing;

pub use cursor::CursorMarkers;
pub use nav::NavElements;
