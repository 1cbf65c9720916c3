pub mod map_renderer;
pub mod map_wrapper;
