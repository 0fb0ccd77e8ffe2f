//! Text tree rendering of a template, without touching the filesystem.
//!
//! ```text
//! project_clean/
//! ├── cmd/
//! │   └── main.go
//! ├── go.mod
//! └── README.md
//! ```
//!
//! Entries are printed in template order. Because validated templates declare
//! each directory before its contents, a template written depth-first renders
//! as a proper tree.

use std::collections::HashMap;

use crate::domain::entities::{ArchitectureTemplate, template::TemplateNode};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Render the tree for `template`, one line per entry plus the root line.
///
/// Directories are suffixed with `/`. Every line ends with `\n`.
pub fn render_tree(template: &ArchitectureTemplate) -> String {
    let nodes = &template.tree.nodes;

    // For each entry: does a later entry share its parent?
    let has_later_sibling: Vec<bool> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let parent = node.path().parent();
            nodes[i + 1..].iter().any(|n| n.path().parent() == parent)
        })
        .collect();

    let index_of: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.path().as_str(), i))
        .collect();

    let mut out = String::new();
    out.push_str(&template.architecture.project_dir_name());
    out.push_str("/\n");

    for (i, node) in nodes.iter().enumerate() {
        let path = node.path();

        // Ancestors outermost first: "a", "a/b" for "a/b/c".
        for (slash, _) in path.as_str().match_indices('/') {
            let ancestor = &path.as_str()[..slash];
            let continues = index_of
                .get(ancestor)
                .is_some_and(|&idx| has_later_sibling[idx]);
            out.push_str(if continues { PIPE } else { SPACE });
        }

        out.push_str(if has_later_sibling[i] { BRANCH } else { LAST_BRANCH });
        out.push_str(path.file_name());
        if matches!(node, TemplateNode::Directory(_)) {
            out.push('/');
        }
        out.push('\n');
    }

    out
}

/// Relative paths the tree shows, in template order.
pub fn preview_paths(template: &ArchitectureTemplate) -> Vec<&str> {
    template.paths().map(|p| p.as_str()).collect()
}
