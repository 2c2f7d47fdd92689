mod generate_link_preview;

pub use generate_link_preview::generate_link_preview_handler;
