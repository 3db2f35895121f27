//! Tree-walking evaluator over the parsed AST.
//!
//! Only literals and the two prefix operators produce values; every other
//! node reports `NotImplementedError`.

pub mod evaluator;
pub mod object;
