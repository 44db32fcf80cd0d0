//! パトリシアトライのノード
//!
//! ノードのラベルとペイロードは構築後に変更されません。
//! 更新は、古いノードを消費して新しいノードを作るコンストラクタを通じて行い、
//! 親の [`PtNodeArray`] のスロットを置き換えます。

use crate::code_point::{CodePoint, CodePointArrayView};
use crate::dictionary::pt_node_array::PtNodeArray;
use crate::word_property::WordProperty;

/// トライのノード
///
/// ラベルは、このノード以下のすべての単語が共有する圧縮されたコードポイント列です。
/// ラベルがちょうど単語を完成させるノード(終端ノード)だけが
/// [`WordProperty`] を持ちます。
#[derive(Debug)]
pub struct PtNode {
    code_points: Vec<CodePoint>,
    children: PtNodeArray,
    word_property: Option<WordProperty>,
}

impl PtNode {
    /// 非終端ノードを作成します。
    pub(crate) fn non_terminal(code_points: CodePointArrayView) -> Self {
        debug_assert!(!code_points.is_empty());
        Self {
            code_points: code_points.to_vec(),
            children: PtNodeArray::default(),
            word_property: None,
        }
    }

    /// 新しい単語の終端ノードを作成します。
    pub(crate) fn terminal(code_points: CodePointArrayView, word_property: &WordProperty) -> Self {
        debug_assert!(!code_points.is_empty());
        Self {
            code_points: code_points.to_vec(),
            children: PtNodeArray::default(),
            word_property: Some(word_property.clone()),
        }
    }

    /// ラベルだけを置き換えたノードを作成します。
    ///
    /// `pt_node` の子ノード配列とペイロードはコピーされずに移動します。
    pub(crate) fn with_code_points(code_points: Vec<CodePoint>, pt_node: PtNode) -> Self {
        debug_assert!(!code_points.is_empty());
        Self {
            code_points,
            children: pt_node.children,
            word_property: pt_node.word_property,
        }
    }

    /// ペイロードだけを置き換えたノードを作成します。
    ///
    /// `pt_node` のラベルと子ノード配列はコピーされずに移動します。
    pub(crate) fn with_word_property(word_property: &WordProperty, pt_node: PtNode) -> Self {
        Self {
            code_points: pt_node.code_points,
            children: pt_node.children,
            word_property: Some(word_property.clone()),
        }
    }

    /// ラベルを返します。
    #[inline(always)]
    pub fn code_points(&self) -> CodePointArrayView<'_> {
        CodePointArrayView::from(&self.code_points)
    }

    /// ラベルの先頭のコードポイントを返します。
    #[inline(always)]
    pub fn first_code_point(&self) -> CodePoint {
        self.code_points[0]
    }

    /// 終端ノードであればその単語プロパティを返します。
    #[inline(always)]
    pub fn word_property(&self) -> Option<&WordProperty> {
        self.word_property.as_ref()
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.word_property.is_some()
    }

    #[inline(always)]
    pub fn children(&self) -> &PtNodeArray {
        &self.children
    }

    #[inline(always)]
    pub(crate) fn children_mut(&mut self) -> &mut PtNodeArray {
        &mut self.children
    }
}
