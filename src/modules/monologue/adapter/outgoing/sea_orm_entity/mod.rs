pub mod monologues;
