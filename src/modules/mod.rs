pub mod auth;
pub mod blog_post;
pub mod code_category;
pub mod experience;
pub mod like;
pub mod link_preview;
pub mod monologue;
pub mod profile;
pub mod related_content;
pub mod skill;
