pub mod profiles;
pub mod social_links;
