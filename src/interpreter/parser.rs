use crate::{
    ast::{PrintTarget, Statement},
    interpreter::{
        lexer::{Line, Token},
        value::Value,
    },
};

/// Parses a single line into a statement.
///
/// A line may be one of:
/// - a variable declaration.
/// - a print statement.
///
/// Parsing is attempted in that order; the first matching shape is
/// returned. A line that matches no shape yields `None` and is skipped by
/// the run loop — unrecognized lines are not an error.
///
/// # Parameters
/// - `line`: The sealed line to match.
///
/// # Returns
/// The parsed [`Statement`], or `None` if the line is not a statement.
///
/// # Example
/// ```
/// use shriek::interpreter::{lexer::tokenize_lines, parser::parse_line};
///
/// let lines = tokenize_lines("var x = 5!x y!").unwrap();
///
/// assert!(parse_line(&lines[0]).is_some());
/// assert!(parse_line(&lines[1]).is_none());
/// ```
pub fn parse_line(line: &Line) -> Option<Statement> {
    parse_variable_declaration(line).or_else(|| parse_print(line))
}

/// Parses a variable declaration statement.
///
/// Accepted shapes:
///
/// ```text
/// var <name> = <digits>
/// var <name> = '<word>'
/// var <name> = "<word>"
/// ```
///
/// The quotes around a string value must be of the same kind. A bare digit
/// run declares a number; a quoted body always declares a string, even
/// when the body is made of digits.
fn parse_variable_declaration(line: &Line) -> Option<Statement> {
    match line.tokens.as_slice() {
        [Token::Var, Token::Identifier(name), Token::Equals, Token::Integer(raw)] => {
            Some(Statement::VariableDeclaration { name:  name.clone(),
                                                  value: Value::Number(raw.clone()),
                                                  line:  line.number, })
        },
        [Token::Var, Token::Identifier(name), Token::Equals, open, Token::Identifier(text), close]
            if is_quote(open) && open == close =>
        {
            Some(Statement::VariableDeclaration { name:  name.clone(),
                                                  value: Value::Str(text.clone()),
                                                  line:  line.number, })
        },
        _ => None,
    }
}

/// Parses a print statement.
///
/// Accepted shapes:
///
/// ```text
/// print(<name>)
/// print('<word>')
/// print("<word>")
/// ```
///
/// A bare identifier prints the named variable; a quoted body prints its
/// text verbatim with no variable lookup.
fn parse_print(line: &Line) -> Option<Statement> {
    match line.tokens.as_slice() {
        [Token::Print, Token::LParen, Token::Identifier(name), Token::RParen] => {
            Some(Statement::Print { target: PrintTarget::Variable(name.clone()),
                                    line:   line.number, })
        },
        [Token::Print, Token::LParen, open, Token::Identifier(text), close, Token::RParen]
            if is_quote(open) && open == close =>
        {
            Some(Statement::Print { target: PrintTarget::Literal(text.clone()),
                                    line:   line.number, })
        },
        _ => None,
    }
}

const fn is_quote(token: &Token) -> bool {
    matches!(token, Token::SingleQuote | Token::DoubleQuote)
}
