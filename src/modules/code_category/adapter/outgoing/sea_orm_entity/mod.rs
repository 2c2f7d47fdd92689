pub mod code_categories;
