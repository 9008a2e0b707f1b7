//! Lexer for Lispy using logos.

use logos::Logos;

use crate::error::ParseError;
use crate::span::Span;

/// Token kinds produced by logos.
///
/// `Number` outranks `Symbol`: `-5` and `42` match both patterns with the
/// same length and must lex as numbers, while a lone `-` stays a symbol.
/// Logos prefers the longest match, so a run like `1-2` or `5x` arrives as
/// one `Symbol` and [`lex`] splits the numeric prefix back off.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[regex(r";[^\n]*")]
    Comment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&%]+")]
    Symbol,
}

/// A lexed token: its kind and where it sits in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The token's text within `source`.
    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.range()]
    }
}

/// Lex source code into tokens, dropping comments.
///
/// Fails on the first character that starts no token.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(TokenKind::Comment) => {}
            Ok(TokenKind::Symbol) => split_symbol_run(source, span, &mut tokens),
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(()) => {
                let ch = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedChar { ch, span });
            }
        }
    }

    tracing::trace!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Length of the `-?[0-9]+` prefix of `text`, or 0 if there is none.
fn numeric_prefix_len(text: &str) -> usize {
    let sign = usize::from(text.starts_with('-'));
    let digits = text
        .bytes()
        .skip(sign)
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

/// Push the tokens of a symbol-character run.
///
/// A number is tried before a symbol at every position: `1-2` is `1` then
/// `-2`, `5x` is `5` then `x`. Once a position does not start a number, the
/// rest of the run is one symbol (`x5-3` stays whole).
fn split_symbol_run(source: &str, span: Span, tokens: &mut Vec<Token>) {
    let mut start = span.start;
    while start < span.end {
        let rest = Span::new(start, span.end);
        let number = numeric_prefix_len(&source[rest.range()]);
        if number == 0 {
            tokens.push(Token::new(TokenKind::Symbol, rest));
            return;
        }
        let end = start + number;
        tokens.push(Token::new(TokenKind::Number, Span::new(start, end)));
        start = end;
    }
}
