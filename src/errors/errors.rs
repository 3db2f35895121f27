use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedAssignment { .. } => "ExpectedAssignment",
            ErrorImpl::MissingSemicolon { .. } => "MissingSemicolon",
            ErrorImpl::MissingOpeningParen { .. } => "MissingOpeningParen",
            ErrorImpl::MissingClosingParen { .. } => "MissingClosingParen",
            ErrorImpl::MissingOpeningCurly { .. } => "MissingOpeningCurly",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::BooleanParseError { .. } => "BooleanParseError",
            ErrorImpl::NotImplementedError { .. } => "NotImplementedError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::ExpectedIdentifier { token } => ErrorTip::Suggestion(format!(
                "Expected a variable name after `var`, found `{}`",
                token
            )),
            ErrorImpl::ExpectedAssignment { token } => ErrorTip::Suggestion(format!(
                "Expected `=` or `;` after the variable name, found `{}`",
                token
            )),
            ErrorImpl::MissingSemicolon { token, .. } => ErrorTip::Suggestion(format!(
                "Expected `;`, found `{}`",
                token
            )),
            ErrorImpl::MissingOpeningParen { token, .. } => {
                ErrorTip::Suggestion(format!("Expected `(`, found `{}`", token))
            }
            ErrorImpl::MissingClosingParen { token, .. } => {
                ErrorTip::Suggestion(format!("Expected `)`, found `{}`", token))
            }
            ErrorImpl::MissingOpeningCurly { token, .. } => {
                ErrorTip::Suggestion(format!("Expected `{{`, found `{}`", token))
            }
            ErrorImpl::NoPrefixHandler { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit or not whole?",
                token
            )),
            ErrorImpl::BooleanParseError { .. } => ErrorTip::None,
            ErrorImpl::NotImplementedError { node } => ErrorTip::Suggestion(format!(
                "Evaluating `{}` has not been implemented",
                node
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("var error - expected identifier, got {token:?}")]
    ExpectedIdentifier { token: String },
    #[error("var error - expected assignment after identifier, got {token:?}")]
    ExpectedAssignment { token: String },
    #[error("{context} error - expected semicolon after expression, got {token:?}")]
    MissingSemicolon { context: String, token: String },
    #[error("{context} error - missing opening paren, got {token:?}")]
    MissingOpeningParen { context: String, token: String },
    #[error("{context} error - missing closing paren, got {token:?}")]
    MissingClosingParen { context: String, token: String },
    #[error("{context} error - missing opening curly brace, got {token:?}")]
    MissingOpeningCurly { context: String, token: String },
    #[error("no prefix parsing function for token {token:?}")]
    NoPrefixHandler { token: String },
    #[error("error parsing integer literal: {token:?}")]
    NumberParseError { token: String },
    #[error("error parsing boolean literal: {token:?}")]
    BooleanParseError { token: String },
    #[error("evaluation of {node:?} is not implemented")]
    NotImplementedError { node: String },
}
