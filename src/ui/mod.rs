pub mod controls;
pub mod fields_view;
pub mod frame_json;
pub mod indicator;
pub mod render;
pub mod renderer;
pub mod span;
pub mod style;
pub mod text_edit;
pub mod theme;
pub mod view;
