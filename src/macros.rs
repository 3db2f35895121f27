//! Utility macros for the front-end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span over a byte range of one file

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$class` - The TokenClass
/// * `$value` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenClass::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($class:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            class: $class,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span from `$start` to `$end` (byte offsets) in `$file`.
///
/// ```ignore
/// let span = MK_SPAN!(lexer.pos, lexer.pos + lexeme.len(), lexer.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        $crate::Span {
            start: $crate::Position($start as u32, std::rc::Rc::clone(&$file)),
            end: $crate::Position($end as u32, std::rc::Rc::clone(&$file)),
        }
    };
}
