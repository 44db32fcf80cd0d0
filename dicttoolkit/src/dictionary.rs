//! 中間辞書
//!
//! このモジュールは、バイナリ辞書へシリアライズする前の単語と言語情報を
//! メモリ上に蓄積するためのパトリシアトライを提供します。
//!
//! ## 構成
//!
//! - [`IntermediateDict`]: ヘッダーとルートのノード配列を所有する辞書本体
//! - [`PtNodeArray`]: 先頭コードポイントで昇順に並んだ兄弟ノードの配列
//! - [`PtNode`]: 圧縮されたラベル、任意のペイロード、子ノード配列を持つノード
//! - [`IntermediateDictHeader`]: 解釈されない属性マップ

pub mod header;
pub mod pt_node;
pub mod pt_node_array;

use crate::code_point::CodePointArrayView;
use crate::errors::{DictError, Result};
use crate::word_property::WordProperty;

pub use crate::dictionary::header::{AttributeMap, IntermediateDictHeader};
pub use crate::dictionary::pt_node::PtNode;
pub use crate::dictionary::pt_node_array::PtNodeArray;

/// 単語の最大長(コードポイント数)
pub const MAX_WORD_LENGTH: usize = 48;

/// メモリ上のパトリシアトライで表現された辞書
///
/// 単語を一つずつ [`add_word()`](Self::add_word) で追加し、
/// 構築後は読み取り専用のアクセサを通じて走査します。
/// 並行アクセスや永続化は扱いません。
///
/// # 例
///
/// ```
/// use dicttoolkit::{utf8, IntermediateDict, IntermediateDictHeader, UnigramProperty, WordProperty};
///
/// let mut dict = IntermediateDict::new(IntermediateDictHeader::default());
/// let hello = WordProperty::new(
///     utf8::code_points("hello"),
///     UnigramProperty::with_probability(100),
///     vec![],
/// );
/// assert!(dict.add_word(&hello));
/// assert!(!dict.add_word(&hello));
///
/// let found = dict.get_word_property(&utf8::code_points("hello"));
/// assert_eq!(found, Some(&hello));
/// assert_eq!(dict.get_word_property(&utf8::code_points("hell")), None);
/// ```
#[derive(Debug)]
pub struct IntermediateDict {
    header: IntermediateDictHeader,
    root_pt_node_array: PtNodeArray,
}

impl IntermediateDict {
    /// 指定されたヘッダーを持つ空の辞書を作成します。
    pub fn new(header: IntermediateDictHeader) -> Self {
        Self {
            header,
            root_pt_node_array: PtNodeArray::default(),
        }
    }

    #[inline(always)]
    pub fn header(&self) -> &IntermediateDictHeader {
        &self.header
    }

    /// ルートのノード配列を返します。
    ///
    /// シリアライザはここから兄弟の昇順にトライを走査します。
    #[inline(always)]
    pub fn root_pt_node_array(&self) -> &PtNodeArray {
        &self.root_pt_node_array
    }

    /// 単語を追加します。
    ///
    /// 空の単語、[`MAX_WORD_LENGTH`] を超える単語、すでに登録されている単語は
    /// 追加されず、`false` を返します。その場合、辞書は変更されません。
    pub fn add_word(&mut self, word_property: &WordProperty) -> bool {
        self.try_add_word(word_property).is_ok()
    }

    /// 単語を追加し、失敗した場合はその理由を返します。
    ///
    /// # エラー
    ///
    /// - 単語の長さが不正な場合は [`DictError::InvalidWordLength`]
    /// - 同じ単語がすでに登録されている場合は [`DictError::DuplicateWord`]
    ///
    /// いずれの場合も辞書は変更されません。
    pub fn try_add_word(&mut self, word_property: &WordProperty) -> Result<()> {
        let code_points = word_property.code_points();
        if code_points.is_empty() || code_points.len() > MAX_WORD_LENGTH {
            return Err(DictError::InvalidWordLength {
                len: code_points.len(),
                max: MAX_WORD_LENGTH,
            });
        }
        Self::add_word_inner(code_points, word_property, &mut self.root_pt_node_array)
    }

    fn add_word_inner(
        code_points: CodePointArrayView,
        word_property: &WordProperty,
        pt_node_array: &mut PtNodeArray,
    ) -> Result<()> {
        debug_assert!(!code_points.is_empty());

        let pos = match pt_node_array.search(code_points[0]) {
            Ok(pos) => pos,
            Err(insert_pos) => {
                // No sibling shares the first code point.
                pt_node_array.insert(insert_pos, PtNode::terminal(code_points, word_property));
                return Ok(());
            }
        };

        let pt_node = pt_node_array.get_mut(pos);
        let pt_node_code_points = pt_node.code_points();
        let i = code_points.common_prefix_len(pt_node_code_points);

        if i == pt_node_code_points.len() {
            if i < code_points.len() {
                return Self::add_word_inner(
                    code_points.skip(i),
                    word_property,
                    pt_node.children_mut(),
                );
            }
            if pt_node.is_terminal() {
                return Err(DictError::DuplicateWord);
            }
            pt_node_array.replace(pos, |old| PtNode::with_word_property(word_property, old));
            return Ok(());
        }

        // The labels diverge inside the existing node. Introduce a new parent
        // for the common part and move the existing node under it.
        log::debug!(
            "splitting a node at {} of {} code points",
            i,
            pt_node_code_points.len()
        );
        let suffix = pt_node_code_points.skip(i).to_vec();
        let word_ends_here = i == code_points.len();
        pt_node_array.replace(pos, |old| {
            let mut parent = if word_ends_here {
                PtNode::terminal(code_points, word_property)
            } else {
                PtNode::non_terminal(code_points.limit(i))
            };
            parent
                .children_mut()
                .insert(0, PtNode::with_code_points(suffix, old));
            parent
        });
        if word_ends_here {
            return Ok(());
        }
        Self::add_word_inner(
            code_points.skip(i),
            word_property,
            pt_node_array.get_mut(pos).children_mut(),
        )
    }

    /// 単語プロパティを検索します。
    ///
    /// 返される参照は辞書を借用するため、次の [`add_word()`](Self::add_word)
    /// の呼び出しより長く保持することはできません。
    /// 空のコードポイント列に対しては常に `None` を返します。
    pub fn get_word_property<'a, V>(&self, code_points: V) -> Option<&WordProperty>
    where
        V: Into<CodePointArrayView<'a>>,
    {
        let mut code_points = code_points.into();
        let mut pt_node_array = &self.root_pt_node_array;
        while !code_points.is_empty() {
            let pt_node = pt_node_array.find(code_points[0])?;
            let pt_node_code_points = pt_node.code_points();
            if code_points.len() < pt_node_code_points.len()
                || code_points.common_prefix_len(pt_node_code_points) != pt_node_code_points.len()
            {
                return None;
            }
            code_points = code_points.skip(pt_node_code_points.len());
            if code_points.is_empty() {
                return pt_node.word_property();
            }
            pt_node_array = pt_node.children();
        }
        None
    }

    /// 登録されているすべての単語プロパティを、コードポイント列の辞書順で返します。
    pub fn word_properties(&self) -> WordProperties<'_> {
        WordProperties {
            stack: vec![self.root_pt_node_array.iter()],
        }
    }

    /// 登録されている単語数を返します。
    pub fn word_count(&self) -> usize {
        self.word_properties().count()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root_pt_node_array.is_empty()
    }
}

/// [`IntermediateDict::word_properties()`] が返すイテレータ
///
/// ノードのペイロードを子より先に、兄弟を昇順に訪れる前順走査です。
pub struct WordProperties<'a> {
    stack: Vec<std::slice::Iter<'a, PtNode>>,
}

impl<'a> Iterator for WordProperties<'a> {
    type Item = &'a WordProperty;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.stack.last_mut()?.next();
            let pt_node = match next {
                Some(pt_node) => pt_node,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            if !pt_node.children().is_empty() {
                self.stack.push(pt_node.children().iter());
            }
            if let Some(word_property) = pt_node.word_property() {
                return Some(word_property);
            }
        }
    }
}
