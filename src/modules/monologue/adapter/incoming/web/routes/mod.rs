mod create_monologue;
mod delete_monologue;
mod error_response;
mod get_monologues;
mod patch_monologue;
mod publish_monologue;

pub use create_monologue::create_monologue_handler;
pub use delete_monologue::delete_monologue_handler;
pub use get_monologues::{
    get_admin_monologues_handler, get_monologue_handler, get_monologues_handler,
};
pub use patch_monologue::patch_monologue_handler;
pub use publish_monologue::{publish_monologue_handler, unpublish_monologue_handler};
