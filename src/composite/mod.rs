pub mod compositor;
pub mod encode;
pub mod spec;
pub mod text;
