//! 兄弟ノードの配列

use std::slice;

use crate::code_point::CodePoint;
use crate::dictionary::pt_node::PtNode;

/// 同じ分岐レベルにある兄弟ノードの順序付き配列
///
/// 各ノードのラベル先頭のコードポイントで昇順に並び、
/// 兄弟間で先頭のコードポイントが重複することはありません。
#[derive(Debug, Default)]
pub struct PtNodeArray {
    pt_nodes: Vec<PtNode>,
}

impl PtNodeArray {
    #[inline(always)]
    pub fn pt_nodes(&self) -> &[PtNode] {
        &self.pt_nodes
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, PtNode> {
        self.pt_nodes.iter()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pt_nodes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pt_nodes.is_empty()
    }

    /// 先頭のコードポイントが `code_point` であるノードを探します。
    ///
    /// # 戻り値
    ///
    /// 見つかった場合は `Ok(位置)`、見つからない場合は順序を保ったまま
    /// 挿入できる位置を `Err` で返します。挿入位置は、先頭のコードポイントが
    /// `code_point` 以上となる最初のノードの位置です。
    #[inline(always)]
    pub fn search(&self, code_point: CodePoint) -> Result<usize, usize> {
        self.pt_nodes
            .binary_search_by_key(&code_point, PtNode::first_code_point)
    }

    /// 先頭のコードポイントが `code_point` であるノードを返します。
    #[inline(always)]
    pub fn find(&self, code_point: CodePoint) -> Option<&PtNode> {
        self.search(code_point).ok().map(|i| &self.pt_nodes[i])
    }

    /// ノード配列以下のすべての不変条件を検査します。
    ///
    /// 兄弟が先頭のコードポイントで狭義昇順に並び、
    /// すべてのラベルが空でない場合に `true` を返します。
    pub fn verify(&self) -> bool {
        let sorted = self
            .pt_nodes
            .windows(2)
            .all(|w| w[0].first_code_point() < w[1].first_code_point());
        sorted
            && self
                .pt_nodes
                .iter()
                .all(|n| !n.code_points().is_empty() && n.children().verify())
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, i: usize) -> &mut PtNode {
        &mut self.pt_nodes[i]
    }

    /// `i` 番目にノードを挿入します。
    pub(crate) fn insert(&mut self, i: usize, pt_node: PtNode) {
        debug_assert!(i == 0 || self.pt_nodes[i - 1].first_code_point() < pt_node.first_code_point());
        debug_assert!(
            i == self.pt_nodes.len()
                || pt_node.first_code_point() < self.pt_nodes[i].first_code_point()
        );
        self.pt_nodes.insert(i, pt_node);
    }

    /// `i` 番目のノードを、それを消費して作られた新しいノードで置き換えます。
    pub(crate) fn replace<F>(&mut self, i: usize, f: F)
    where
        F: FnOnce(PtNode) -> PtNode,
    {
        let old = self.pt_nodes.remove(i);
        let new = f(old);
        self.insert(i, new);
    }
}

impl<'a> IntoIterator for &'a PtNodeArray {
    type Item = &'a PtNode;
    type IntoIter = slice::Iter<'a, PtNode>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.pt_nodes.iter()
    }
}
