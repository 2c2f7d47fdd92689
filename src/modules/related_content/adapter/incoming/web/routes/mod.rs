mod get_related_content;

pub use get_related_content::get_related_content_handler;
