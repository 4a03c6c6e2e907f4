//! Word wrapping for documentation and help text.

use unicode_width::UnicodeWidthStr;

/// Narrowest line the wrapper will pack text into.
///
/// Long field labels can eat most of the column budget; below this width the
/// help text would degrade into one word per line.
pub const MIN_WRAP_WIDTH: usize = 20;

/// Wraps `text` on word boundaries.
///
/// Each line of `text` is packed greedily into lines of at most
/// `column_limit - first_line_limit` display columns (never less than
/// [`MIN_WRAP_WIDTH`]). `first_line_limit` is the width of the label printed
/// before the text: every line after the first is indented by that many
/// spaces so it lines up under the first one. Tokens are never split, blank
/// lines are kept, and the result is trimmed.
///
/// # Examples
///
/// ```
/// use modelgram::wrap::wrap;
///
/// let wrapped = wrap("one two three four five six", 30, 4);
/// assert_eq!(wrapped, "one two three four five\n    six");
///
/// let wrapped = wrap("alpha beta gamma delta epsilon zeta", 24, 0);
/// assert_eq!(wrapped, "alpha beta gamma delta\nepsilon zeta");
/// ```
pub fn wrap(text: &str, column_limit: usize, first_line_limit: usize) -> String {
    let width = column_limit
        .saturating_sub(first_line_limit)
        .max(MIN_WRAP_WIDTH);

    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for token in source_line.split_whitespace() {
            let token_width = token.width();
            if line.is_empty() {
                line.push_str(token);
                line_width = token_width;
            } else if line_width + 1 + token_width <= width {
                line.push(' ');
                line.push_str(token);
                line_width += 1 + token_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(token);
                line_width = token_width;
            }
        }

        lines.push(line);
    }

    let indent = " ".repeat(first_line_limit);
    let mut wrapped = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            wrapped.push('\n');
            if !line.is_empty() {
                wrapped.push_str(&indent);
            }
        }
        wrapped.push_str(line);
    }

    wrapped.trim().to_string()
}
