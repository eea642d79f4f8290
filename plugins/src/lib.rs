pub mod factory;
pub mod pick;
pub mod render;
