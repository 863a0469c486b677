pub mod punctuation;
pub mod stopword;
