//! Shared value objects passed between the signature source, the
//! documentation source, and the validator.
//!
//! Everything here is owned data: the parser extracts what it needs from
//! the arena-backed AST and drops the arena, so none of these types carry
//! a lifetime. All of them are immutable snapshots scoped to one
//! validation call.

use std::fmt;

use serde::Serialize;

/// Identifies one function or one (class, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallableId {
    /// A standalone function, by bare name (e.g. "wp_insert_post").
    Function(String),
    /// A method on a class-like type: (class name, method name).
    Method(String, String),
}

impl CallableId {
    pub fn function(name: impl Into<String>) -> Self {
        CallableId::Function(name.into())
    }

    pub fn method(class: impl Into<String>, method: impl Into<String>) -> Self {
        CallableId::Method(class.into(), method.into())
    }
}

impl fmt::Display for CallableId {
    /// Renders the display form used in every violation message:
    /// `function()` or `Class::method()`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallableId::Function(name) => write!(f, "{name}()"),
            CallableId::Method(class, method) => write!(f, "{class}::{method}()"),
        }
    }
}

/// A parameter's default value, as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultValue {
    /// The default expression's source text (e.g. `null`, `'post'`, `[]`).
    pub raw: String,
    /// Whether the default is the empty-array literal (`[]` or `array()`).
    /// An empty-array default is considered self-evident and is exempt
    /// from the "Default ..." description requirement.
    pub is_empty_array: bool,
}

/// One formal parameter of a callable, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSignature {
    /// The parameter name WITHOUT the `$` sigil (e.g. "args").
    pub name: String,
    /// Whether the native type hint is `array`.
    pub is_array: bool,
    /// Whether the native type hint is `callable`.
    pub is_callable: bool,
    /// The class/interface name the parameter is hinted to (leading `\`
    /// stripped). `None` for untyped or non-class hints. `stdClass` is
    /// carried but treated as the generic catch-all by the validator.
    pub class_name: Option<String>,
    /// Whether a caller may omit the argument (has a default value or is
    /// variadic, matching PHP reflection's `isOptional()`).
    pub is_optional: bool,
    /// The default value, when one is declared.
    pub default: Option<DefaultValue>,
}

/// The reflected signature of one callable: its identity plus its ordered
/// parameter list. Declaration order is the only correlation key between
/// a signature and its `@param` tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableSignature {
    pub id: CallableId,
    pub parameters: Vec<ParameterSignature>,
}

/// One `@param` tag from a docblock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTag {
    /// The type-and-name token pair (e.g. "array $items"). Expected to
    /// split into exactly two whitespace-delimited tokens; anything else
    /// is an upstream data fault, not a documentation-style violation.
    pub raw: String,
    /// Free text following the name. Multi-line descriptions (including
    /// hash-style `{ ... }` blocks) are joined with `\n`.
    pub description: String,
}

/// Parsed documentation for one callable. A callable with no doc comment
/// at all is represented as `Option<DocumentationBlock>` being `None`,
/// not as an empty block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentationBlock {
    /// The short description (first paragraph of non-tag text).
    pub summary: String,
    /// The `@param` tags, in the order they appear in the docblock.
    pub param_tags: Vec<ParamTag>,
}

/// A callable extracted from PHP source: its signature paired with the
/// raw text of the docblock immediately preceding it (if any).
#[derive(Debug, Clone)]
pub struct CallableDecl {
    pub signature: CallableSignature,
    pub docblock: Option<String>,
}

/// The rule a violation broke. Every kind maps to exactly one sentence
/// template in the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    MissingDocComment,
    EmptyShortDescription,
    ParamCountMismatch,
    EmptyParamDescription,
    ParamNameMismatch,
    MissingArrayTypeHint,
    MissingClassTypeHint,
    ForbiddenCallbackToken,
    MissingCallableTypeHint,
    MissingOptionalMarker,
    SpuriousOptionalMarker,
    MissingDefaultValueNote,
    SpuriousDefaultValueNote,
}

/// One documentation defect, with a self-contained human-readable message
/// naming the callable and (where applicable) the parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

/// The complete, immutable result of validating one callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Compliant,
    Violations(Vec<Violation>),
}

impl Verdict {
    /// An empty violation list collapses to `Compliant`.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Verdict::Compliant
        } else {
            Verdict::Violations(violations)
        }
    }

    pub fn is_compliant(&self) -> bool {
        matches!(self, Verdict::Compliant)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Verdict::Compliant => &[],
            Verdict::Violations(violations) => violations,
        }
    }
}
