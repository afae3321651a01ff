//! Parsing support for boolean expressions

use super::error::{ExpressionParseError, ParseBoolExprError};
use super::BoolExpr;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Generated by lalrpop into OUT_DIR from bool_expr.lalrpop
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/bool_expr.rs"));
}

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Accepts:
    /// - `+`, `|` or `||` for OR
    /// - `*`, `&` or `&&` for AND
    /// - `~` or `!` for NOT
    /// - Parentheses for grouping
    /// - Constants: `0`, `1`, `true`, `false`
    pub fn parse(input: &str) -> Result<Self, ParseBoolExprError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| convert_error(input, e).into())
    }

    /// Parse an expression whose variables must all be among `labels`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::{BoolExpr, ParseBoolExprError};
    ///
    /// assert!(BoolExpr::parse_over("A & ~B", &["A", "B"]).is_ok());
    /// assert!(matches!(
    ///     BoolExpr::parse_over("A & C", &["A", "B"]),
    ///     Err(ParseBoolExprError::UnknownVariable { .. })
    /// ));
    /// ```
    pub fn parse_over<S: AsRef<str>>(input: &str, labels: &[S]) -> Result<Self, ParseBoolExprError> {
        let expr = Self::parse(input)?;
        if let Some(name) = expr
            .collect_variables()
            .into_iter()
            .find(|name| !labels.iter().any(|l| l.as_ref() == name.as_ref()))
        {
            return Err(ParseBoolExprError::UnknownVariable { name });
        }
        Ok(expr)
    }
}

impl std::str::FromStr for BoolExpr {
    type Err = ParseBoolExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolExpr::parse(s)
    }
}

fn convert_error<T: std::fmt::Display>(
    input: &str,
    error: ParseError<usize, T, &'static str>,
) -> ExpressionParseError {
    let input: Arc<str> = Arc::from(input);
    match error {
        ParseError::InvalidToken { location } => ExpressionParseError::InvalidToken {
            input,
            position: location,
        },
        ParseError::UnrecognizedEof { expected, .. } => {
            ExpressionParseError::UnexpectedEnd { input, expected }
        }
        ParseError::UnrecognizedToken {
            token: (start, token, _),
            expected,
        } => ExpressionParseError::UnexpectedToken {
            input,
            token: Arc::from(token.to_string().as_str()),
            position: start,
            expected,
        },
        ParseError::ExtraToken {
            token: (start, token, _),
        } => ExpressionParseError::UnexpectedToken {
            input,
            token: Arc::from(token.to_string().as_str()),
            position: start,
            expected: Vec::new(),
        },
        ParseError::User { .. } => ExpressionParseError::InvalidToken { input, position: 0 },
    }
}
