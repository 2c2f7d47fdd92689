pub mod entities;
pub mod hierarchy;
