//! 这个模块保存词表的双向映射：词到词序号的前缀树，以及词序号到词内容的压缩存储。

use crate::utok;
use patricia_tree::PatriciaMap;
use std::fmt;

/// 训练得到的词表。
///
/// 词序号从 0 开始连续编号，与词的字典序一致。
#[derive(Clone)]
pub(crate) struct Vocab {
    /// 保存所有词的字符串内容，以 u8 为单位所以不需要对齐，占用空间少
    text: Box<[u8]>,
    /// 按词序号保存每个词在 `text` 中的偏移量和长度
    slices: Box<[(u32, u32)]>,
    /// 词的前缀树，用于从词查找词序号
    trie: PatriciaMap<utok>,
}

impl Vocab {
    /// 从升序且去重的词序列构造词表，词序号即词在序列中的位置。
    pub fn new<'a>(sorted: impl IntoIterator<Item = &'a str>) -> Self {
        let words = sorted.into_iter().map(str::as_bytes).collect::<Vec<_>>();
        debug_assert!(words.windows(2).all(|w| w[0] < w[1]));

        let total_len = words.iter().map(|w| w.len()).sum();
        let (text, slices) = compress(&words, total_len);
        let trie = words
            .iter()
            .enumerate()
            .map(|(i, &w)| (w, i as utok))
            .collect();

        Self { text, slices, trie }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// word -> token
    #[inline]
    pub fn token(&self, word: &str) -> Option<utok> {
        self.trie.get(word.as_bytes()).copied()
    }

    /// token -> word
    #[inline]
    pub fn word(&self, token: utok) -> Option<&str> {
        let &(off, len) = self.slices.get(token as usize)?;
        let bytes = &self.text[off as usize..][..len as usize];
        // 切片内容与构造时传入的 &str 逐字节相同，必定是合法的 utf-8
        Some(unsafe { std::str::from_utf8_unchecked(bytes) })
    }

    /// 按词序号顺序遍历词表。
    pub fn iter(&self) -> impl Iterator<Item = (utok, &str)> + '_ {
        (0..self.len() as utok).filter_map(|t| self.word(t).map(|w| (t, w)))
    }
}

impl Default for Vocab {
    #[inline]
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl fmt::Debug for Vocab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// 利用词表中的重复部分压缩词表。
fn compress(words: &[&[u8]], total_len: usize) -> (Box<[u8]>, Box<[(u32, u32)]>) {
    let mut slices = vec![(0u32, 0u32); words.len()];
    let mut text_buf = Vec::<u8>::with_capacity(total_len);
    let mut indices = (0..words.len()).collect::<Vec<_>>();
    // 对词按内容长度从长到短排序，因为短词有可能是长词的子串，可以避免重复存储相同内容
    indices.sort_unstable_by_key(|&i| std::cmp::Reverse(words[i].len()));
    for i in indices {
        let w = words[i];
        // 查找子串，若存在则复用，否则将新的内容追加到缓存
        let off = memchr::memmem::find(&text_buf, w).unwrap_or_else(|| {
            let off = text_buf.len();
            text_buf.extend_from_slice(w);
            off
        });
        slices[i] = (off as _, w.len() as _);
    }
    (text_buf.into_boxed_slice(), slices.into_boxed_slice())
}
