pub mod app;
pub mod dialog;
pub mod input;
pub mod item;
pub mod list;
pub mod render;
pub mod text_input;
pub mod theme;

pub use app::run;
