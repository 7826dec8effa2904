//! Block-string value normalization.
//!
//! A block string's raw body (line terminators already normalized to `\n`)
//! is cooked into its semantic value in two steps: the common indentation of
//! every line after the first is removed, then leading and trailing blank
//! lines are dropped. The GraphQL specification defines this so that block
//! strings can be laid out to match the surrounding document's indentation
//! without that indentation leaking into the value.

/// Normalize a raw block-string body into its semantic value.
///
/// The first line never contributes to the common indent (it starts right
/// after the opening `"""`), and blank lines contribute neither indent nor
/// survive at the edges of the result.
///
/// # Example
///
/// ```
/// use gqlc_lex::normalize_block_string;
///
/// assert_eq!(normalize_block_string("\n  hello\n    world\n"), "hello\n  world");
/// ```
pub fn normalize_block_string(raw: &str) -> String {
    let mut lines: Vec<&str> = raw.split('\n').collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace(line);
        if indent < line.len() && common_indent.map_or(true, |common| indent < common) {
            common_indent = Some(indent);
            if indent == 0 {
                break;
            }
        }
    }

    if let Some(indent) = common_indent {
        for line in lines.iter_mut().skip(1) {
            // indent is counted in bytes of ASCII whitespace, so the slice
            // always lands on a character boundary
            *line = if line.len() > indent { &line[indent..] } else { "" };
        }
    }

    let mut start = 0;
    let mut end = lines.len();
    while start < end && is_blank(lines[start]) {
        start += 1;
    }
    while start < end && is_blank(lines[end - 1]) {
        end -= 1;
    }

    lines[start..end].join("\n")
}

/// The number of leading space/tab bytes of `line`.
fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|b| matches!(b, b' ' | b'\t'))
        .count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}
