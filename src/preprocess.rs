/// Canonicalizes raw input ahead of the lexer: trims surrounding
/// whitespace, rewrites the `^` power alias to `**`, folds the
/// case-insensitive `ln(` alias to `log(`, and lowercases whole-word
/// references to the session variables `ans` and `mem`.
///
/// Total and idempotent. Malformed input is left for the parser to reject.
pub fn preprocess(text: &str) -> String {
    let s = text.trim().replace('^', "**");
    let s = rewrite_ln(&s);
    let s = fold_word(&s, "ans");
    fold_word(&s, "mem")
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Rewrites `ln(` to `log(` at word boundaries, any letter case.
fn rewrite_ln(s: &str) -> String {
    let src = s.as_bytes();
    let mut out = Vec::with_capacity(src.len());
    let mut i = 0;
    while i < src.len() {
        let at_boundary = i == 0 || !is_word(src[i - 1]);
        if at_boundary
            && src.len() - i >= 3
            && src[i..i + 2].eq_ignore_ascii_case(b"ln")
            && src[i + 2] == b'('
        {
            out.extend_from_slice(b"log(");
            i += 3;
        } else {
            out.push(src[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap()
}

/// Lowercases whole-word, case-insensitive occurrences of `word`.
fn fold_word(s: &str, word: &str) -> String {
    let src = s.as_bytes();
    let pat = word.as_bytes();
    let mut out = Vec::with_capacity(src.len());
    let mut i = 0;
    while i < src.len() {
        let at_boundary = i == 0 || !is_word(src[i - 1]);
        let after = i + pat.len();
        if at_boundary
            && src.len() >= after
            && src[i..after].eq_ignore_ascii_case(pat)
            && !src.get(after).copied().is_some_and(is_word)
        {
            out.extend_from_slice(pat);
            i = after;
        } else {
            out.push(src[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap()
}
