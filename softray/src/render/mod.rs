pub mod basic;
pub mod intersection;
pub mod render;
pub mod tracer;
