mod reader;
mod tokenizer;

pub use reader::LineReader;
pub use tokenizer::{tokenize, TokenList, DELIMITERS};
