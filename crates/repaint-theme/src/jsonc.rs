//! Comment stripping for comment-annotated JSON documents.
//!
//! Theme files ship as JSON with `//` and `/* */` comments sprinkled in.
//! This module removes the comments and nothing else: no validation, no
//! reformatting — if the input was malformed JSON it stays malformed, just
//! without comments.
//!
//! One inherited quirk is preserved on purpose: a `{` or `}` encountered
//! inside a `//` comment terminates the comment and is copied to the
//! output. Real theme files contain scope strings with braces in trailing
//! comments, and downstream tooling relies on the comment ending there
//! rather than at the end of the line.

/// Stripper state, one variant per lexical context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Plain document text — copied through.
    Code,
    /// Inside `// ...` — discarded until a brace (see module docs).
    LineComment,
    /// Inside `/* ... */` — discarded until the closing `*/`.
    BlockComment,
    /// Inside a double-quoted string — copied through, escapes intact.
    InString,
}

/// Remove `//` and `/* */` comments from `input`.
///
/// String contents are never touched: a backslash inside a string copies
/// itself and the following character unconditionally, so an escaped quote
/// or a `//` inside a string cannot be misread as a delimiter.
///
/// With `preserve_newlines` set, the two-character escaped-newline texts
/// `\n` and `\r` inside a line comment are copied through instead of
/// discarded — useful when the output must keep the source's visual line
/// structure.
#[must_use]
pub fn strip_comments(input: &str, preserve_newlines: bool) -> String {
    let mut output = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::Code => match ch {
                '"' => {
                    output.push(ch);
                    state = State::InString;
                }
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        state = State::LineComment;
                    }
                    Some('*') => {
                        chars.next();
                        state = State::BlockComment;
                    }
                    // A lone slash (or one at end of input) is plain text.
                    _ => output.push(ch),
                },
                _ => output.push(ch),
            },

            State::LineComment => match ch {
                '{' | '}' => {
                    output.push(ch);
                    state = State::Code;
                }
                '\\' if preserve_newlines && matches!(chars.peek(), Some('n' | 'r')) => {
                    output.push(ch);
                    if let Some(next) = chars.next() {
                        output.push(next);
                    }
                }
                _ => {}
            },

            State::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }

            State::InString => match ch {
                '\\' => {
                    output.push(ch);
                    if let Some(next) = chars.next() {
                        output.push(next);
                    }
                }
                '"' => {
                    output.push(ch);
                    state = State::Code;
                }
                _ => output.push(ch),
            },
        }
    }

    output
}

// ─── Tests ───────────────────────────────────────────────────────────────────
