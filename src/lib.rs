#![deny(warnings)]

mod error;
mod text;
mod tokenizer;
mod vocab;

pub use error::{Error, Result};
pub use text::sanitize;
pub use tokenizer::Tokenizer;

/// `utok` for token id.
#[allow(non_camel_case_types)]
pub type utok = u32;
