pub mod common;
pub mod geography;
pub mod item;
pub mod point;
