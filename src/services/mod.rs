pub mod catalog;
pub mod fallback;
pub mod scroll;
pub mod swipe;
pub mod viewer;
