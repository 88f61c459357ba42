pub mod catalog;
pub mod directory;
pub mod observability;
pub mod persistence;
