//! Document size checks. Independent of front matter validity.

use crate::config::LimitsConfig;
use crate::core::RecordLog;
use crate::core::Section;
use crate::core::frontmatter::document_body;

/// Line boundaries: `\n`, `\r`, `\r\n`, and the vertical-tab, form-feed,
/// file/group/record separator, NEL and Unicode line/paragraph separators.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Lines in the document; a trailing line break does not open a new line.
#[must_use]
pub fn line_count(content: &str) -> usize {
    let mut count = 0;
    let mut open_line = false;
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if is_line_break(c) {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            count += 1;
            open_line = false;
        } else {
            open_line = true;
        }
    }
    count + usize::from(open_line)
}

/// Words separated by Unicode whitespace or the ASCII information separators.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .filter(|word| !word.is_empty())
        .count()
}

pub fn check(content: &str, limits: &LimitsConfig, log: &mut RecordLog) {
    let lines = line_count(content);
    if lines > limits.max_lines {
        log.warn(
            Section::Size,
            "SKILL.md line count",
            format!("{lines} lines (recommend <= {})", limits.max_lines),
        );
    } else {
        log.pass(Section::Size, "SKILL.md line count", format!("{lines} lines"));
    }

    let words = word_count(document_body(content));
    if words > limits.max_body_words {
        log.warn(
            Section::Size,
            "Body word count",
            format!("{words} words (recommend <= {})", limits.max_body_words),
        );
    } else {
        log.pass(Section::Size, "Body word count", format!("{words} words"));
    }
}
