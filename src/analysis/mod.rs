pub mod filters;
pub mod normalizer;
pub mod tokenizer;
