pub mod color;
pub mod file_formats;
pub mod model_spec;
pub mod placement;
pub mod result;
pub mod state;
