//! 正規化・照合・カテゴリ判定のプロパティテスト

use bharat_scan::analyzer::Analyzer;
use bharat_scan::categorizer::categorize;
use bharat_scan::matcher::{MatchSet, PatternMatcher};
use bharat_scan::normalizer::normalize;
use bharat_scan::{PatternTable, ScamType};
use proptest::prelude::*;

/// パターン表の語を混ぜたメッセージ
fn message_strategy() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "OTP", "pin", "Spinner", "CBI", "warrant", "loan", "app", "delivery", "fee",
        "your", "account", "will", "be", "deactivated", "http://x.y/z", "www.abc.in",
        "500", "rs.", "it's", "hey", "me", "!!!", "Share", "details", "ht-tp", "_x_",
    ]);
    prop::collection::vec(words, 0..16).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_normalize_idempotent(text in "\\PC{0,80}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_idempotent_on_messages(text in message_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_output_is_clean(text in "[ -~]{0,80}") {
        let out = normalize(&text);

        // 数字・記号なし
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c == '_' || c == ' '));
        // 空白は単一、前後になし
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
        // URL接頭辞の後に文字が続かない
        for token in out.split(' ') {
            prop_assert!(!(token.contains("http") && !token.ends_with("http")));
            prop_assert!(!(token.contains("www") && !token.ends_with("www")));
        }
    }

    #[test]
    fn prop_matches_are_table_patterns(text in message_strategy()) {
        let table = PatternTable::builtin().unwrap();
        let matcher = PatternMatcher::new(&table).unwrap();

        for pattern in matcher.detect(&normalize(&text)).iter() {
            prop_assert!(table.contains_pattern(pattern));
        }
    }

    #[test]
    fn prop_case_insensitive(text in message_strategy()) {
        let table = PatternTable::builtin().unwrap();
        let matcher = PatternMatcher::new(&table).unwrap();

        let lower = matcher.detect(&normalize(&text));
        let upper = matcher.detect(&normalize(&text.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn prop_suspicious_iff_matched(text in message_strategy()) {
        let analyzer = Analyzer::builtin().unwrap();
        let result = analyzer.analyze_message(&text);

        prop_assert_eq!(result.suspicious, !result.detected_patterns.is_empty());
        prop_assert_eq!(result.scam_type == ScamType::NotAScam, !result.suspicious);
    }

    #[test]
    fn prop_single_category_matches_name(
        index in 0usize..5,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let table = PatternTable::builtin().unwrap();
        let category = &table.categories()[index];

        // 1カテゴリのパターンだけからなる一致集合
        let matches: MatchSet = picks
            .iter()
            .map(|pick| pick.get(&category.patterns).as_str())
            .collect();

        let verdict = categorize(&matches, &table);
        prop_assert_eq!(verdict.scam_type, ScamType::Single(category.name.clone()));
        prop_assert!(verdict.suspicious);
    }
}
