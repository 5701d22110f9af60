//! テキスト正規化モジュール
//!
//! 照合前にメッセージを比較可能な形へ変換する。元のメッセージは表示用に
//! 別途保持し、正規化結果は照合にのみ使う。
//!
//! ## 処理フロー（順序固定）
//! 1. 小文字化
//! 2. URL除去（`http…` / `www…` から空白までを削除）
//! 3. 数字除去
//! 4. 記号除去（単語文字・空白以外を削除）
//! 5. 連続空白を1つにまとめ、前後をトリム

use regex::Regex;

lazy_static::lazy_static! {
    // URLらしき部分: http/https/www から空白の直前まで
    static ref URL_RE: Regex = Regex::new(r"http\S+|www\S+").unwrap();
    static ref DIGIT_RE: Regex = Regex::new(r"\d+").unwrap();
    static ref PUNCT_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref SPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// メッセージを正規化する
///
/// 全域・決定的な純関数。空文字列や記号だけの入力は空文字列になる。
///
/// 手順2〜4は変化がなくなるまで繰り返す。`ht-tp…` のように記号除去で
/// 新たなURL接頭辞が現れる入力でも、`normalize(normalize(s)) == normalize(s)`
/// が成り立つ。
pub fn normalize(text: &str) -> String {
    let mut current = to_lowercase(text);

    loop {
        let next = strip_punctuation(&strip_digits(&strip_urls(&current)));
        if next == current {
            break;
        }
        current = next;
    }

    collapse_whitespace(&current)
}

/// 1. 小文字化
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// 2. URL除去
pub fn strip_urls(text: &str) -> String {
    URL_RE.replace_all(text, "").into_owned()
}

/// 3. 数字除去（空白に置換せず削除）
pub fn strip_digits(text: &str) -> String {
    DIGIT_RE.replace_all(text, "").into_owned()
}

/// 4. 記号除去（英数字・アンダースコア・空白以外）
pub fn strip_punctuation(text: &str) -> String {
    PUNCT_RE.replace_all(text, "").into_owned()
}

/// 5. 空白の正規化
pub fn collapse_whitespace(text: &str) -> String {
    SPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whatsapp_message() {
        let text = "Hey it's me, I lost my wallet, can you send me 500 rs urgently?";
        assert_eq!(
            normalize(text),
            "hey its me i lost my wallet can you send me rs urgently"
        );
    }

    #[test]
    fn test_normalize_removes_time() {
        assert_eq!(
            normalize("See you at the meeting tomorrow at 5pm."),
            "see you at the meeting tomorrow at pm"
        );
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(strip_urls("visit https://bit.ly/x now"), "visit  now");
        assert_eq!(strip_urls("go to www.example.com"), "go to ");
        assert_eq!(strip_urls("http://a.b/c?d=1 and http://e.f"), " and ");
        // 接頭辞だけでは除去しない
        assert_eq!(strip_urls("http www"), "http www");
    }

    #[test]
    fn test_strip_urls_inside_token() {
        // トークン途中の http 以降も除去される
        assert_eq!(strip_urls("link:http://x.y done"), "link: done");
    }

    #[test]
    fn test_strip_digits() {
        assert_eq!(strip_digits("rs 500 in 2days"), "rs  in days");
        assert_eq!(strip_digits("no digits"), "no digits");
    }

    #[test]
    fn test_strip_punctuation_keeps_underscore() {
        assert_eq!(strip_punctuation("a_b, c-d! e's"), "a_b cd es");
        assert_eq!(strip_punctuation("state/ut"), "stateut");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_normalize_url_digits_punct() {
        let text = "URGENT!!! Your OTP is 482913. Verify at https://fake-bank.in/login";
        assert_eq!(normalize(text), "urgent your otp is verify at");
    }

    #[test]
    fn test_normalize_empty_and_symbols() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! 123 ???"), "");
    }

    #[test]
    fn test_normalize_non_ascii_letters() {
        assert_eq!(normalize("Café – RÉSUMÉ"), "café résumé");
    }

    #[test]
    fn test_normalize_revealed_url_prefix() {
        // 記号除去で "httpx" が現れるケース
        let once = normalize("see ht-tpx.y now");
        assert_eq!(once, "see now");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_revealed_url_is_stripped_entirely() {
        // 1回だけの処理なら "wwwsite" / "httpsx" が残るが、繰り返しで除去される
        assert_eq!(normalize("w-w-w.site"), "");
        assert_eq!(normalize("h1ttps://x"), "");
        assert_eq!(normalize("pay at w-w-w.site today"), "pay at today");
    }

    #[test]
    fn test_normalize_idempotent_examples() {
        for text in [
            "Hey it's me, I lost my wallet!",
            "CBI warrant: pay 5000 now www.pay.me",
            "  multiple   spaces\tand\nnewlines  ",
            "h1ttps://x",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "input: {:?}", text);
        }
    }
}
