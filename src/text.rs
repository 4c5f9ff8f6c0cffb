//! 文本预处理：清洗和按空白切词。

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// 删除所有不是 ASCII 字母或空格的字符。
///
/// 被删除的字符不会替换为空格，因此 `"Hello,world"` 会变成 `"Helloworld"`。
/// 没有需要删除的字符时直接借用输入。
pub fn sanitize(text: &str) -> Cow<'_, str> {
    static NOT_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z ]+").unwrap());
    NOT_WORD.replace_all(text, "")
}

/// 按空白切分已清洗的文本，连续空格和首尾空格不产生空词。
#[inline]
pub(crate) fn split_words(clean: &str) -> impl Iterator<Item = &str> {
    clean.split_ascii_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        split_words(&sanitize(text)).map(str::to_string).collect()
    }

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(sanitize("Hello Shashwat Dixit!"), "Hello Shashwat Dixit");
        assert_eq!(sanitize("a1b2 c3!?"), "ab c");
        assert_eq!(sanitize("tab\there\nnewline"), "tabherenewline");
    }

    #[test]
    fn concatenates_across_removed_chars() {
        assert_eq!(sanitize("Hello,world"), "Helloworld");
    }

    #[test]
    fn keeps_case_and_spacing() {
        assert_eq!(sanitize("  Mixed   CASE  "), "  Mixed   CASE  ");
    }

    #[test]
    fn borrows_clean_input() {
        assert!(matches!(sanitize("already clean"), Cow::Borrowed(_)));
        assert!(matches!(sanitize("not clean."), Cow::Owned(_)));
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(sanitize("café naïve 优"), "caf nave ");
    }

    #[test]
    fn empty() {
        assert_eq!(sanitize(""), "");
        assert!(words("").is_empty());
        assert!(words("  ... 123 ").is_empty());
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            words("  Hello   Shashwat, this is simple!!! "),
            ["Hello", "Shashwat", "this", "is", "simple"]
        );
    }
}
