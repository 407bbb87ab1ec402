//! Docblock standards checker for PHP.
//!
//! Verifies that the `/** ... */` comment attached to every function and
//! method correctly and completely describes its parameter list, as
//! determined by the callable's actual signature. Each broken rule
//! yields one precise, human-readable finding naming the callable and
//! the parameter, suitable for direct display in CI output or as a
//! labeled assertion failure.
//!
//! The core is [`validator::validate`], a pure function from a reflected
//! signature and a parsed docblock to a verdict. Around it:
//!
//! - [`parser`] extracts callable signatures from PHP source (via
//!   mago_syntax),
//! - [`docblock`] locates and parses the doc comments,
//! - [`checker`] indexes parsed files and drives the validator,
//! - [`report`] aggregates and renders the findings.

pub mod checker;
pub mod docblock;
pub mod parser;
pub mod report;
pub mod types;
pub mod validator;

pub use checker::{CallableCheck, CheckError, Checker, SourceIndex};
pub use types::{
    CallableId, CallableSignature, DocumentationBlock, ParamTag, ParameterSignature, Verdict,
    Violation, ViolationKind,
};
pub use validator::validate;
