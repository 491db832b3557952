//! Line classification for the markup subset.

use crate::model::Block;

/// Classifies one raw input line into a [`Block`].
///
/// Rules are checked in order against the trimmed line:
///
/// 1. Empty after trim → [`Block::Blank`]
/// 2. `## ` prefix → [`Block::Heading2`]
/// 3. `# ` prefix → [`Block::Heading1`]
/// 4. `- ` or `* ` prefix → [`Block::Bullet`]
/// 5. Anything else → [`Block::Paragraph`]
///
/// The level-2 prefix is tested before the level-1 prefix so that `## `
/// lines never match the shorter `# ` rule. Classification is total and
/// pure: every line maps to exactly one variant and the result depends only
/// on the line's leading characters after trimming.
pub fn classify(line: &str) -> Block {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Block::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix("## ") {
        return Block::Heading2(rest.to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("# ") {
        return Block::Heading1(rest.to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("- ") {
        return Block::Bullet(rest.to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("* ") {
        return Block::Bullet(rest.to_string());
    }

    Block::Paragraph(trimmed.to_string())
}

/// Classifies every line of a newline-delimited body text.
pub fn classify_lines(body: &str) -> Vec<Block> {
    body.lines().map(classify).collect()
}
