use crate::{
    error::{Error, Result},
    text::{sanitize, split_words},
    utok,
    vocab::Vocab,
};
use log::{debug, trace};
use std::{borrow::Cow, collections::BTreeSet};

/// 整词分词器。
///
/// 从语料训练出词表，之后在文本和词序号序列之间转换。
/// 训练需要独占访问（`&mut self`），编解码只需共享访问，训练完成后可以在多个线程中并发编解码。
#[derive(Clone, Default, Debug)]
pub struct Tokenizer {
    vocab: Vocab,
}

impl Tokenizer {
    /// 构造一个未训练的分词器，词表为空。
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 构造分词器并用 `corpus` 训练。
    pub fn from_corpus<I, S>(corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ans = Self::new();
        ans.train(corpus);
        ans
    }

    /// 见 [`crate::sanitize`]。
    #[inline]
    pub fn sanitize(text: &str) -> Cow<'_, str> {
        sanitize(text)
    }

    /// 用 `corpus` 的每一行重建词表，原有词表被整体替换。
    ///
    /// 每行清洗后按空白切词，所有不同的词按字典序从 0 开始编号。
    /// 空语料得到空词表。
    pub fn train<I, S>(&mut self, corpus: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = 0usize;
        let mut words = BTreeSet::new();
        for line in corpus {
            lines += 1;
            words.extend(split_words(&sanitize(line.as_ref())).map(str::to_string));
        }
        self.vocab = Vocab::new(words.iter().map(String::as_str));
        debug!("trained on {lines} lines, vocab size {}", self.vocab.len());
    }

    /// 将文本编码为词序号序列，词表外的词被直接丢弃。
    pub fn encode(&self, text: &str) -> Vec<utok> {
        split_words(&sanitize(text))
            .filter_map(|w| self.vocab.token(w))
            .collect()
    }

    /// 将文本编码为词序号序列，词表外的词编码为 `unk`。
    ///
    /// `unk` 由调用者选择，通常取 [`Tokenizer::vocab_size`]，以免和训练得到的词序号冲突。
    pub fn encode_with_unk(&self, text: &str, unk: utok) -> Vec<utok> {
        split_words(&sanitize(text))
            .map(|w| self.vocab.token(w).unwrap_or(unk))
            .collect()
    }

    /// 将词序号序列解码为以单个空格连接的文本。
    ///
    /// 任何不在词表中的词序号都会导致 [`Error::UnknownToken`]。
    pub fn decode(&self, tokens: &[utok]) -> Result<String> {
        let words = tokens
            .iter()
            .map(|&t| {
                self.vocab.word(t).ok_or_else(|| {
                    trace!("decode failed at token {t}");
                    Error::UnknownToken {
                        token: t,
                        vocab_size: self.vocab.len(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(words.join(" "))
    }

    /// 词表中的词数。
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// 词表是否为空，未训练或语料中没有词时为真。
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab.len() == 0
    }

    /// word -> token
    #[inline]
    pub fn token_to_id(&self, word: &str) -> Option<utok> {
        self.vocab.token(word)
    }

    /// token -> word
    #[inline]
    pub fn id_to_token(&self, token: utok) -> Option<&str> {
        self.vocab.word(token)
    }

    /// 按词序号顺序遍历词表。
    #[inline]
    pub fn words(&self) -> impl Iterator<Item = (utok, &str)> + '_ {
        self.vocab.iter()
    }
}
