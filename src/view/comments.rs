//! Flattening of comment trees into a linear, indented fragment sequence.

use html_escape::encode_text;

use crate::domain::CommentNode;

/// Default left indent per nesting level, in pixels.
pub const DEFAULT_INDENT_PX: u32 = 40;

/// Pre-order walk over a comment forest.
///
/// Uses an explicit stack, so thread depth is bounded by heap only.
pub struct Flatten<'a> {
    stack: Vec<&'a CommentNode>,
}

impl<'a> Flatten<'a> {
    pub fn new(roots: &'a [CommentNode]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a CommentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.comments.iter().rev());
        Some(node)
    }
}

pub fn flatten(roots: &[CommentNode]) -> Flatten<'_> {
    Flatten::new(roots)
}

/// Total number of nodes in the forest.
pub fn count(roots: &[CommentNode]) -> usize {
    flatten(roots).count()
}

pub fn render_comment(node: &CommentNode, indent_px: u32) -> String {
    format!(
        r#"
<div style="padding-left: {indent}px;" class="mt-4">
  <div class="text-gray-400">
    <i class="fa fa-sort-up mr-2"></i>
    <strong>{user}</strong> {time_ago}
  </div>
  <p class="text-gray-700">{content}</p>
</div>"#,
        indent = node.depth.saturating_mul(indent_px),
        user = encode_text(node.author()),
        time_ago = encode_text(&node.time_ago),
        content = node.content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64, depth: u32, children: Vec<CommentNode>) -> CommentNode {
        CommentNode {
            id,
            user: Some(format!("u{}", id)),
            time_ago: "1 hour ago".into(),
            content: format!("<p>c{}</p>", id),
            depth,
            comments: children,
        }
    }

    //  1
    //  ├ 2
    //  │ └ 3
    //  └ 4
    //  5
    //  └ 6
    fn forest() -> Vec<CommentNode> {
        vec![
            node(1, 0, vec![node(2, 1, vec![node(3, 2, vec![])]), node(4, 1, vec![])]),
            node(5, 0, vec![node(6, 1, vec![])]),
        ]
    }

    #[test]
    fn test_preorder_sequence() {
        let roots = forest();
        let ids: Vec<u64> = flatten(&roots).map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_count_matches_all_nodes() {
        assert_eq!(count(&forest()), 6);
        assert_eq!(count(&[]), 0);
    }

    #[test]
    fn test_full_tree_node_count() {
        // depth 3, breadth 3: 3 + 9 + 27 nodes
        fn build(depth: u32, max: u32) -> Vec<CommentNode> {
            if depth == max {
                return Vec::new();
            }
            (0..3)
                .map(|i| node(i, depth, build(depth + 1, max)))
                .collect()
        }
        let roots = build(0, 3);
        assert_eq!(count(&roots), 39);
        assert!(flatten(&roots).zip(flatten(&roots).skip(1)).all(|(a, b)| b.depth <= a.depth + 1));
    }

    #[test]
    fn test_indent_is_depth_times_unit() {
        let roots = forest();
        for n in flatten(&roots) {
            let html = render_comment(n, DEFAULT_INDENT_PX);
            assert!(html.contains(&format!("padding-left: {}px;", n.depth * 40)));
        }
    }

    #[test]
    fn test_render_comment_escapes_author_keeps_content_html() {
        let mut n = node(1, 0, vec![]);
        n.user = Some("<b>x</b>".into());
        let html = render_comment(&n, 40);
        assert!(html.contains("<strong>&lt;b&gt;x&lt;/b&gt;</strong>"));
        assert!(html.contains("<p class=\"text-gray-700\"><p>c1</p></p>"));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut current = node(100_000, 99_999, vec![]);
        for depth in (0..99_999u32).rev() {
            current = node(depth as u64, depth, vec![current]);
        }
        let roots = vec![current];
        assert_eq!(count(&roots), 100_000);
        drop(roots);
    }
}
