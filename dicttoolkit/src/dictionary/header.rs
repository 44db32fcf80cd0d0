//! 中間辞書のヘッダー
//!
//! ヘッダーはコードポイント列からコードポイント列への属性マップです。
//! トライはこの内容を解釈せず、そのまま出力側に受け渡します。

use std::collections::BTreeMap;

use crate::code_point::CodePoint;
use crate::errors::Result;
use crate::utf8;

/// 辞書IDの属性キー
pub const DICTIONARY_ID_KEY: &str = "dictionary";
/// ロケールの属性キー
pub const DICTIONARY_LOCALE_KEY: &str = "locale";
/// バージョンの属性キー
pub const DICTIONARY_VERSION_KEY: &str = "version";
/// 説明の属性キー
pub const DICTIONARY_DESCRIPTION_KEY: &str = "description";
/// 作成日時の属性キー
pub const DICTIONARY_DATE_KEY: &str = "date";

/// 属性マップ
pub type AttributeMap = BTreeMap<Vec<CodePoint>, Vec<CodePoint>>;

/// 中間辞書のヘッダー
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IntermediateDictHeader {
    attribute_map: AttributeMap,
}

impl IntermediateDictHeader {
    pub fn new(attribute_map: AttributeMap) -> Self {
        Self { attribute_map }
    }

    /// 文字列のペアからヘッダーを作成します。
    ///
    /// 同じキーが複数回現れた場合は後の値が優先されます。
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(
            attributes
                .into_iter()
                .map(|(k, v)| (utf8::code_points(k), utf8::code_points(v)))
                .collect(),
        )
    }

    #[inline(always)]
    pub fn attribute_map(&self) -> &AttributeMap {
        &self.attribute_map
    }

    /// 属性値を文字列として取得します。
    ///
    /// # エラー
    ///
    /// 値に不正なコードポイントが含まれる場合にエラーを返します。
    pub fn attribute(&self, key: &str) -> Result<Option<String>> {
        self.attribute_map
            .get(&utf8::code_points(key))
            .map(utf8::to_string)
            .transpose()
    }
}
