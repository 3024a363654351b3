//! Indexed message patterns: `{0}`, `{1}`, ...
//!
//! Single quotes escape: `''` is a literal quote and anything between two
//! single quotes is copied verbatim, braces included. A quote that is never
//! closed runs to the end of the pattern.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("unmatched '{{' at byte {offset}")]
    Unclosed { offset: usize },
    #[error("empty placeholder at byte {offset}")]
    Empty { offset: usize },
    #[error("placeholder {text:?} is not an argument index")]
    InvalidIndex { text: String },
    #[error("placeholder {text:?} uses an unsupported format type")]
    UnsupportedFormat { text: String },
    #[error("placeholder {{{index}}} has no argument, {count} given")]
    MissingArgument { index: usize, count: usize },
}

/// Substitutes `{n}` placeholders with `args[n]`.
///
/// Stricter and looser than the classic message format in two places:
/// whitespace around the index (`{ 0 }`) is accepted, and a placeholder
/// without a matching argument is an error instead of being copied through
/// as `{n}`.
pub fn format_pattern<S: AsRef<str>>(pattern: &str, args: &[S]) -> Result<String, PatternError> {
    let mut out = String::with_capacity(pattern.len() + args.len() * 16);
    let mut in_quote = false;
    let mut chars = pattern.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\'' => {
                if let Some((_, '\'')) = chars.peek() {
                    chars.next();
                    out.push('\'');
                } else {
                    in_quote = !in_quote;
                }
            }
            _ if in_quote => out.push(c),
            '{' => {
                let start = offset + 1;
                let end = pattern[start..]
                    .find('}')
                    .map(|len| start + len)
                    .ok_or(PatternError::Unclosed { offset })?;
                let index = parse_index(&pattern[start..end], offset)?;
                let arg = args.get(index).ok_or(PatternError::MissingArgument {
                    index,
                    count: args.len(),
                })?;
                out.push_str(arg.as_ref());
                for (next, _) in chars.by_ref() {
                    if next == end {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn parse_index(text: &str, offset: usize) -> Result<usize, PatternError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PatternError::Empty { offset });
    }
    if trimmed.contains(',') {
        return Err(PatternError::UnsupportedFormat {
            text: text.to_owned(),
        });
    }
    trimmed.parse().map_err(|_| PatternError::InvalidIndex {
        text: text.to_owned(),
    })
}
