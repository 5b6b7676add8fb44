use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `var`
    #[token("var")]
    Var,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names or bare words such as `x` or
    /// `hello`. Identifiers are letter runs: a digit always ends one.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. The digit run is kept exactly
    /// as written; it is parsed only when the value is printed.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `'`
    #[token("'")]
    SingleQuote,
    /// `"`
    #[token("\"")]
    DoubleQuote,
    /// `!`, the statement terminator.
    #[token("!")]
    Bang,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

/// One terminated statement: the tokens between two `!` terminators.
///
/// The terminator itself is never part of the token list. Lines preserve
/// source order; line index = declaration order = execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// The tokens of the statement, in source order.
    pub tokens: Vec<Token>,
    /// 0-based position of the line in the script.
    pub number: usize,
}

/// Tokenizes an entire script and groups the tokens into lines.
///
/// The whole input is consumed eagerly before any line is returned. Each
/// `!` seals the tokens accumulated since the previous terminator into one
/// [`Line`]; tokens after the last `!` never form a line and are dropped.
///
/// A digit run whose immediately preceding token is a quote is
/// reclassified as an identifier, so `'123'` holds the *string* `123` —
/// quoting forces string semantics regardless of character class. This is
/// the only context-sensitive lexing rule.
///
/// # Parameters
/// - `source`: The full script text.
///
/// # Returns
/// The sealed lines, in source order.
///
/// # Errors
/// Returns [`ParseError::IllegalCharacter`] for any character that is not
/// whitespace, a letter, a digit, or one of the recognized punctuation
/// characters. Lexing stops at the first such character.
///
/// # Example
/// ```
/// use shriek::interpreter::lexer::{Token, tokenize_lines};
///
/// let lines = tokenize_lines("var x = 5!").unwrap();
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].tokens[0], Token::Var);
/// ```
pub fn tokenize_lines(source: &str) -> Result<Vec<Line>, ParseError> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut after_quote = false;
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::IllegalCharacter { character: lexer.slice().to_string(),
                                                      line:      lines.len(), });
        };

        let token = match token {
            // A digit run directly after a quote is string content.
            Token::Integer(text) if after_quote => Token::Identifier(text),
            other => other,
        };
        after_quote = matches!(token, Token::SingleQuote | Token::DoubleQuote);

        if token == Token::Bang {
            lines.push(Line { tokens: std::mem::take(&mut current),
                              number: lines.len(), });
        } else {
            current.push(token);
        }
    }

    Ok(lines)
}
