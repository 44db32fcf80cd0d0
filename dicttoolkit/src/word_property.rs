//! 単語プロパティ
//!
//! このモジュールは、辞書に登録される単語のコードポイント列と、
//! それに付随する言語情報(ユニグラム確率、ショートカット、n-gram)を定義します。
//! 中間辞書はこれらの値を解釈せず、不透明なペイロードとして保持します。

use crate::code_point::{CodePoint, CodePointArrayView};

/// 履歴情報
///
/// ユーザー辞書で使用されるタイムスタンプ、レベル、出現回数の組です。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct HistoricalInfo {
    pub timestamp: i32,
    pub level: i32,
    pub count: i32,
}

impl HistoricalInfo {
    #[inline(always)]
    pub const fn new(timestamp: i32, level: i32, count: i32) -> Self {
        Self {
            timestamp,
            level,
            count,
        }
    }
}

/// 確率情報
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ProbabilityInfo {
    /// 確率値
    pub probability: i32,

    /// 履歴情報。持たない場合は `None`
    pub historical_info: Option<HistoricalInfo>,
}

impl ProbabilityInfo {
    /// 履歴情報を持たない確率情報を作成します。
    #[inline(always)]
    pub const fn new(probability: i32) -> Self {
        Self {
            probability,
            historical_info: None,
        }
    }

    #[inline(always)]
    pub const fn with_historical_info(probability: i32, historical_info: HistoricalInfo) -> Self {
        Self {
            probability,
            historical_info: Some(historical_info),
        }
    }
}

/// ショートカット
///
/// 単語に関連付けられた別表記と、その確率です。
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ShortcutProperty {
    pub target_code_points: Vec<CodePoint>,
    pub probability: i32,
}

/// ユニグラム情報
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct UnigramProperty {
    pub probability_info: ProbabilityInfo,

    /// 文頭を表す特殊な単語かどうか
    pub is_beginning_of_sentence: bool,

    /// 候補として提示しない単語かどうか
    pub is_not_a_word: bool,

    /// 不快な表現の可能性がある単語かどうか
    pub is_possibly_offensive: bool,

    pub shortcuts: Vec<ShortcutProperty>,
}

impl UnigramProperty {
    /// 確率のみを持つユニグラム情報を作成します。
    pub fn with_probability(probability: i32) -> Self {
        Self {
            probability_info: ProbabilityInfo::new(probability),
            ..Self::default()
        }
    }
}

/// n-gramの文脈を構成する直前の単語
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum PrevWord {
    /// 文頭
    BeginningOfSentence,

    /// 通常の単語
    Word(Vec<CodePoint>),
}

/// n-gram情報
///
/// `prev_words[0]` が直前の単語、`prev_words[1]` がその一つ前の単語を表します。
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NgramProperty {
    pub prev_words: Vec<PrevWord>,
    pub target_code_points: Vec<CodePoint>,
    pub probability_info: ProbabilityInfo,
}

impl NgramProperty {
    /// 文脈の単語数を返します。
    #[inline(always)]
    pub fn prev_word_count(&self) -> usize {
        self.prev_words.len()
    }
}

/// 単語プロパティ
///
/// 構築後は不変です。中間辞書には値としてコピーされます。
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct WordProperty {
    code_points: Vec<CodePoint>,
    unigram_property: UnigramProperty,
    ngram_properties: Vec<NgramProperty>,
}

impl WordProperty {
    /// 新しい単語プロパティを作成します。
    ///
    /// # 引数
    ///
    /// * `code_points` - 単語のコードポイント列
    /// * `unigram_property` - ユニグラム情報
    /// * `ngram_properties` - この単語に関連するn-gram情報
    pub fn new(
        code_points: Vec<CodePoint>,
        unigram_property: UnigramProperty,
        ngram_properties: Vec<NgramProperty>,
    ) -> Self {
        Self {
            code_points,
            unigram_property,
            ngram_properties,
        }
    }

    #[inline(always)]
    pub fn code_points(&self) -> CodePointArrayView<'_> {
        CodePointArrayView::from(&self.code_points)
    }

    #[inline(always)]
    pub fn unigram_property(&self) -> &UnigramProperty {
        &self.unigram_property
    }

    #[inline(always)]
    pub fn ngram_properties(&self) -> &[NgramProperty] {
        &self.ngram_properties
    }

    #[inline(always)]
    pub fn probability(&self) -> i32 {
        self.unigram_property.probability_info.probability
    }
}
