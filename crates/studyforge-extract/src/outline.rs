//! Parse an indented bullet outline into a parent-linked tree
//!
//! Depth is inferred from indentation at a fixed ratio of two leading
//! whitespace characters per level, floored. Tabs are undefined input:
//! each leading whitespace character counts as one column and no tab
//! expansion is attempted.

use studyforge_domain::{Outline, OutlineNode};

/// Parse generated outline text into an [`Outline`].
///
/// Never fails; blank lines are skipped entirely and do not affect level
/// or ancestor tracking. A node's parent is the nearest preceding node
/// with a strictly smaller level, found with a stack of open ancestors.
/// Ids are assigned 1-based in emission order.
pub fn extract(text: &str) -> Outline {
    let mut nodes: Vec<OutlineNode> = Vec::new();
    // Stack of (id, level) for the current ancestor chain
    let mut stack: Vec<(u32, usize)> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        let level = indent / 2;
        let label = strip_bullet(trimmed);

        while stack.last().is_some_and(|&(_, l)| l >= level) {
            stack.pop();
        }
        let parent = stack.last().map(|&(id, _)| id);

        let id = nodes.len() as u32 + 1;
        nodes.push(OutlineNode {
            id,
            label,
            level,
            parent,
        });
        stack.push((id, level));
    }

    Outline { nodes }
}

/// Strip a single leading `-` or `•` bullet marker and any whitespace
/// following it.
fn strip_bullet(line: &str) -> String {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(|rest| rest.trim_start())
        .unwrap_or(line)
        .to_string()
}
