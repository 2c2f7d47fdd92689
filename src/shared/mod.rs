pub mod api;
pub mod clock;
pub mod patch;
pub mod persistence;
pub mod publication;
pub mod validation;
pub mod visibility;
