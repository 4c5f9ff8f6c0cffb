use crate::utok;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// 解码时遇到词表中不存在的词序号。
    #[error("token {token} is out of vocabulary (size {vocab_size})")]
    UnknownToken { token: utok, vocab_size: usize },
}
