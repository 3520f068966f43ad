// Text ingestion — reading documents and splitting them into word tokens.

pub mod source;
pub mod tokenizer;
