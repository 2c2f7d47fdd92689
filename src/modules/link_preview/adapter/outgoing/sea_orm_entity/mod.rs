pub mod url_previews;
