mod like_content;

pub use like_content::{like_blog_post_handler, like_monologue_handler};
