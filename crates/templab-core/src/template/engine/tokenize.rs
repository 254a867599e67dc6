//! Placeholder tokenization
//!
//! Scans a format string once, front to back, and rewrites every placeholder
//! as a freshly minted token. The engine later searches the rendered text for
//! those tokens to learn where each argument ended up, which is why a token
//! must never occur anywhere else: it is a random v4 UUID.

use uuid::Uuid;

use crate::config::consts;
use crate::template::error::TemplateError;
use crate::template::{FormatArg, Value};

/// One piece of a format string
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Piece<'a> {
    /// Literal text (escaped braces arrive as a single-brace piece)
    Text(&'a str),
    Placeholder(Placeholder<'a>),
}

/// A `{...}` site in the format string
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placeholder<'a> {
    /// Explicit argument index, `None` for `{}` / `{:spec}`
    pub index: Option<usize>,
    /// Everything after the first `:`, untrimmed
    pub specifier: Option<&'a str>,
}

/// Scanner state (explicit for testability)
///
/// ```text
/// Text ──{──> SeenLBrace ──{──> [yield "{"]
///   │             └──other──> InPlaceholder ──}──> [yield placeholder]
///   └──}──> SeenRBrace ──}──> [yield "}"]
///                 └──other──> error (lone `}`)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScanState {
    Text,
    SeenLBrace,
    InPlaceholder { content_start: usize },
    SeenRBrace,
}

/// Iterator over the pieces of a format string
///
/// Yields at most one error, after which it is exhausted.
pub(crate) struct PieceStream<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> PieceStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn fail(&mut self, message: &str, offset: usize) -> Option<Result<Piece<'a>, TemplateError>> {
        self.pos = self.source.len();
        Some(Err(TemplateError::MalformedSyntax {
            message: message.to_string(),
            offset,
        }))
    }

    fn placeholder(
        &mut self,
        start: usize,
        content: &'a str,
    ) -> Option<Result<Piece<'a>, TemplateError>> {
        let (index, specifier) = match content.split_once(':') {
            Some((index, specifier)) => (index, Some(specifier)),
            None => (content, None),
        };

        let index = index.trim();
        let index = if index.is_empty() {
            None
        } else {
            match index.parse::<usize>() {
                Ok(index) => Some(index),
                Err(_) => {
                    return self.fail(&format!("Invalid argument index '{}'", index), start);
                }
            }
        };

        Some(Ok(Piece::Placeholder(Placeholder {
            index,
            specifier,
        })))
    }
}

impl<'a> Iterator for PieceStream<'a> {
    type Item = Result<Piece<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        let bytes = source.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        let mut state = ScanState::Text;

        while self.pos < bytes.len() {
            let byte = bytes[self.pos];
            match state {
                ScanState::Text => match byte {
                    b'{' | b'}' if self.pos > start => {
                        return Some(Ok(Piece::Text(&source[start..self.pos])));
                    }
                    b'{' => {
                        state = ScanState::SeenLBrace;
                        self.pos += 1;
                    }
                    b'}' => {
                        state = ScanState::SeenRBrace;
                        self.pos += 1;
                    }
                    _ => self.pos += 1,
                },
                ScanState::SeenLBrace => {
                    if byte == b'{' {
                        self.pos += 1;
                        return Some(Ok(Piece::Text(&source[start..start + 1])));
                    }
                    state = ScanState::InPlaceholder {
                        content_start: self.pos,
                    };
                }
                ScanState::InPlaceholder { content_start } => match byte {
                    b'}' => {
                        let content = &source[content_start..self.pos];
                        self.pos += 1;
                        return self.placeholder(start, content);
                    }
                    b'{' => return self.fail("Nested '{' inside placeholder", self.pos),
                    _ => self.pos += 1,
                },
                ScanState::SeenRBrace => {
                    if byte == b'}' {
                        self.pos += 1;
                        return Some(Ok(Piece::Text(&source[start..start + 1])));
                    }
                    return self.fail("Unmatched '}' (write '}}' for a literal brace)", start);
                }
            }
        }

        match state {
            ScanState::Text => Some(Ok(Piece::Text(&source[start..]))),
            ScanState::SeenLBrace | ScanState::InPlaceholder { .. } => {
                self.fail("Unclosed placeholder", start)
            }
            ScanState::SeenRBrace => {
                self.fail("Unmatched '}' (write '}}' for a literal brace)", start)
            }
        }
    }
}

/// Format string with placeholders replaced by tokens
#[derive(Debug)]
pub(crate) struct Tokenized {
    pub text: String,
    /// Token → argument, in placeholder order
    pub replacements: Vec<(String, FormatArg)>,
}

/// Mint a token that cannot collide with template text
///
/// Tokens are hyphenated UUIDs: hex digits and `-` only, so they never
/// contain braces or line breaks.
pub(crate) fn mint_token() -> String {
    let token = Uuid::new_v4().to_string();
    debug_assert_eq!(token.len(), consts::token::TOKEN_LEN);
    token
}

/// Replace every placeholder in `format` with a fresh token
///
/// Each placeholder must name an existing argument and every argument must
/// be named at least once.
pub(crate) fn tokenize(format: &str, arguments: Vec<Value>) -> Result<Tokenized, TemplateError> {
    let pieces = PieceStream::new(format).collect::<Result<Vec<_>, _>>()?;

    // Resolve implicit indices and count references so each argument is
    // moved into its last use rather than cloned.
    let mut next_implicit = 0;
    let mut uses = vec![0usize; arguments.len()];
    let mut resolved = Vec::with_capacity(pieces.len());
    for piece in &pieces {
        if let Piece::Placeholder(placeholder) = piece {
            let index = placeholder.index.unwrap_or_else(|| {
                next_implicit += 1;
                next_implicit - 1
            });
            let count = uses.get_mut(index).ok_or(TemplateError::MissingArgument {
                index,
                count: arguments.len(),
            })?;
            *count += 1;
            resolved.push(index);
        }
    }

    if let Some(index) = uses.iter().position(|&count| count == 0) {
        return Err(TemplateError::UnusedArgument { index });
    }

    let mut arguments: Vec<Option<Value>> = arguments.into_iter().map(Some).collect();
    let mut resolved = resolved.into_iter();
    let mut text = String::with_capacity(format.len());
    let mut replacements = Vec::new();

    for piece in pieces {
        match piece {
            Piece::Text(literal) => text.push_str(literal),
            Piece::Placeholder(placeholder) => {
                let Some(index) = resolved.next() else {
                    break;
                };
                uses[index] -= 1;
                let value = if uses[index] == 0 {
                    arguments[index].take()
                } else {
                    arguments[index].clone()
                };

                let token = mint_token();
                text.push_str(&token);
                replacements.push((
                    token,
                    FormatArg::new(
                        value.unwrap_or(Value::Null),
                        placeholder.specifier.map(str::to_string),
                    ),
                ));
            }
        }
    }

    Ok(Tokenized { text, replacements })
}
