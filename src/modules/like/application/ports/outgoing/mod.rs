pub mod like_counter;

pub use like_counter::{LikeCounter, LikeCounterError};
