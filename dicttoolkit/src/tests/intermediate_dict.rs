use crate::code_point::CodePointArrayView;
use crate::dictionary::*;
use crate::errors::DictError;
use crate::utf8;
use crate::word_property::*;

fn new_dict() -> IntermediateDict {
    IntermediateDict::new(IntermediateDictHeader::default())
}

fn word(s: &str, probability: i32) -> WordProperty {
    WordProperty::new(
        utf8::code_points(s),
        UnigramProperty::with_probability(probability),
        vec![],
    )
}

fn lookup<'a>(dict: &'a IntermediateDict, s: &str) -> Option<&'a WordProperty> {
    dict.get_word_property(&utf8::code_points(s))
}

fn labels(pt_node_array: &PtNodeArray) -> Vec<String> {
    pt_node_array
        .iter()
        .map(|n| utf8::to_string(n.code_points()).unwrap())
        .collect()
}

/// 共通の接頭辞を持つ単語の追加と検索のテスト
#[test]
fn test_add_and_get() {
    let words = ["abcd", "efgh", "ab", "abcdefg", "efef", "ef"];
    let mut dict = new_dict();
    for (i, w) in words.iter().enumerate() {
        assert!(dict.add_word(&word(w, i as i32)), "{w}");
    }
    for (i, w) in words.iter().enumerate() {
        assert_eq!(lookup(&dict, w), Some(&word(w, i as i32)), "{w}");
    }
    assert!(!dict.add_word(&word("abcd", 100)));
    assert_eq!(lookup(&dict, "abcd").unwrap().probability(), 0);

    for w in ["a", "abc", "abcde", "e", "efe", "efghi", "x"] {
        assert_eq!(lookup(&dict, w), None, "{w}");
    }
    assert!(dict.root_pt_node_array().verify());
    assert_eq!(dict.word_count(), words.len());
}

/// 分割後のトライの形状のテスト
#[test]
fn test_split_shape() {
    let mut dict = new_dict();
    assert!(dict.add_word(&word("abcd", 1)));
    assert_eq!(labels(dict.root_pt_node_array()), ["abcd"]);

    // The new word ends inside the existing label.
    assert!(dict.add_word(&word("ab", 2)));
    let root = dict.root_pt_node_array();
    assert_eq!(labels(root), ["ab"]);
    assert!(root.pt_nodes()[0].is_terminal());
    assert_eq!(labels(root.pt_nodes()[0].children()), ["cd"]);

    // The labels diverge after a common prefix.
    assert!(dict.add_word(&word("abxy", 3)));
    let ab = &dict.root_pt_node_array().pt_nodes()[0];
    assert_eq!(labels(ab.children()), ["cd", "xy"]);

    assert!(dict.add_word(&word("acd", 4)));
    let root = dict.root_pt_node_array();
    assert_eq!(labels(root), ["a"]);
    let a = &root.pt_nodes()[0];
    assert!(!a.is_terminal());
    assert_eq!(labels(a.children()), ["b", "cd"]);
    let b = &a.children().pt_nodes()[0];
    assert_eq!(b.word_property(), Some(&word("ab", 2)));
    assert_eq!(labels(b.children()), ["cd", "xy"]);
}

/// 非終端ノードへの単語の追加のテスト
#[test]
fn test_add_to_non_terminal() {
    let mut dict = new_dict();
    assert!(dict.add_word(&word("abc", 1)));
    assert!(dict.add_word(&word("abd", 2)));
    assert_eq!(lookup(&dict, "ab"), None);

    assert!(dict.add_word(&word("ab", 3)));
    assert_eq!(lookup(&dict, "ab"), Some(&word("ab", 3)));
    assert_eq!(labels(dict.root_pt_node_array()), ["ab"]);
    assert_eq!(
        labels(dict.root_pt_node_array().pt_nodes()[0].children()),
        ["c", "d"]
    );
    assert!(!dict.add_word(&word("ab", 4)));
}

/// 重複した単語は最初のペイロードを保持することのテスト
#[test]
fn test_duplicate_keeps_first() {
    let mut dict = new_dict();
    let first = WordProperty::new(
        utf8::code_points("京都"),
        UnigramProperty {
            probability_info: ProbabilityInfo::with_historical_info(
                10,
                HistoricalInfo::new(1, 2, 3),
            ),
            is_possibly_offensive: true,
            ..UnigramProperty::default()
        },
        vec![],
    );
    assert!(dict.add_word(&first));
    assert!(matches!(
        dict.try_add_word(&word("京都", 20)),
        Err(DictError::DuplicateWord)
    ));
    assert_eq!(lookup(&dict, "京都"), Some(&first));
    assert_eq!(dict.word_count(), 1);
}

/// 単語の長さの制限のテスト
#[test]
fn test_word_length() {
    let mut dict = new_dict();
    let longest = "a".repeat(MAX_WORD_LENGTH);
    let too_long = "a".repeat(MAX_WORD_LENGTH + 1);
    assert!(dict.add_word(&word(&longest, 1)));
    assert!(matches!(
        dict.try_add_word(&word(&too_long, 1)),
        Err(DictError::InvalidWordLength { len: 49, max: 48 })
    ));
    assert!(matches!(
        dict.try_add_word(&word("", 1)),
        Err(DictError::InvalidWordLength { len: 0, .. })
    ));
    assert_eq!(lookup(&dict, &too_long), None);
    assert_eq!(dict.word_count(), 1);
}

/// 空のクエリは常に見つからないことのテスト
#[test]
fn test_empty_query() {
    let mut dict = new_dict();
    assert!(dict.is_empty());
    assert_eq!(dict.get_word_property(CodePointArrayView::default()), None);
    assert!(dict.add_word(&word("a", 1)));
    assert!(!dict.is_empty());
    assert_eq!(dict.get_word_property(CodePointArrayView::default()), None);
}

/// 追加の順序によらず同じ単語が取得できることのテスト
#[test]
fn test_insertion_order() {
    let words = [
        "a", "ab", "abc", "abd", "b", "ba", "bab", "東", "東京", "東京都", "京都", "京", "z",
        "zz", "zzz", "あい", "あいう", "あお",
    ];
    let mut expected: Vec<&str> = words.to_vec();
    expected.sort_by_key(|w| utf8::code_points(w));

    let orders: Vec<Vec<&str>> = vec![
        words.to_vec(),
        words.iter().rev().copied().collect(),
        expected.clone(),
        words.iter().step_by(2).chain(words.iter().skip(1).step_by(2)).copied().collect(),
    ];
    for order in orders {
        let mut dict = new_dict();
        for w in &order {
            assert!(dict.add_word(&word(w, 1)), "{w}");
        }
        assert!(dict.root_pt_node_array().verify());
        for w in &words {
            assert!(lookup(&dict, w).is_some(), "{w}");
        }
        let found: Vec<String> = dict
            .word_properties()
            .map(|p| utf8::to_string(p.code_points()).unwrap())
            .collect();
        assert_eq!(found, expected);
    }
}

/// ルートの兄弟の並び順のテスト
#[test]
fn test_root_order() {
    let mut dict = new_dict();
    for w in ["m", "c", "x", "a", "k"] {
        assert!(dict.add_word(&word(w, 1)));
    }
    assert_eq!(labels(dict.root_pt_node_array()), ["a", "c", "k", "m", "x"]);
    assert!(dict.root_pt_node_array().find(u32::from('k')).is_some());
    assert!(dict.root_pt_node_array().find(u32::from('b')).is_none());
}

/// n-gram情報がそのまま保持されることのテスト
#[test]
fn test_opaque_payload() {
    let mut dict = new_dict();
    let w = WordProperty::new(
        utf8::code_points("peace"),
        UnigramProperty {
            shortcuts: vec![ShortcutProperty {
                target_code_points: utf8::code_points("☮"),
                probability: 5,
            }],
            ..UnigramProperty::with_probability(80)
        },
        vec![NgramProperty {
            prev_words: vec![
                PrevWord::Word(utf8::code_points("world")),
                PrevWord::BeginningOfSentence,
            ],
            target_code_points: utf8::code_points("peace"),
            probability_info: ProbabilityInfo::new(70),
        }],
    );
    assert!(dict.add_word(&w));
    assert!(dict.add_word(&word("pea", 1)));
    let found = lookup(&dict, "peace").unwrap();
    assert_eq!(found, &w);
    assert_eq!(found.ngram_properties()[0].prev_word_count(), 2);
}
