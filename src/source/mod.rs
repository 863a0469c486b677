pub mod document;
pub mod manifest;
