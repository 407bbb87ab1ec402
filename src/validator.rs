//! The parameter-documentation validator.
//!
//! `validate` is a pure function from one callable's reflected signature
//! and its parsed docblock to a [`Verdict`]. It holds no state, performs
//! no I/O, and is safe to call concurrently for different callables.
//!
//! Documentation defects never fault: every broken rule becomes one entry
//! in the verdict's violation list, each rendered as a self-contained
//! sentence naming the callable and parameter. The only fault is a
//! [`MalformedTag`], raised when a `@param` tag's type-and-name token does
//! not split into exactly two tokens — that is a data-contract breach by
//! the documentation source, not a documentation-quality finding.

use thiserror::Error;

use crate::types::{
    CallableSignature, DocumentationBlock, ParamTag, ParameterSignature, Verdict, Violation,
    ViolationKind,
};

/// The catch-all object type. A parameter hinted to `stdClass` is exempt
/// from the class-name rule because the hint carries no information worth
/// repeating in the docblock.
const GENERIC_OBJECT: &str = "stdClass";

/// A `@param` tag whose content could not be split into a type token and
/// a `$name` token. Distinct from every [`ViolationKind`]: this means the
/// upstream parse is broken, not that the documentation is bad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed @param tag for `{callable}`: expected `type $name`, found `{raw}`")]
pub struct MalformedTag {
    pub callable: String,
    pub raw: String,
}

/// Validate one callable's documentation against its signature.
///
/// `doc` is `None` when the callable has no doc comment at all; that is
/// the only case where validation stops after a single violation. An
/// empty summary is recorded and checking continues. A parameter/tag
/// count mismatch is recorded and the per-parameter stage is skipped,
/// since positional pairing is unsafe once the counts diverge.
///
/// All remaining rules run for every parameter index, pairing
/// `parameters[i]` with `param_tags[i]` strictly by position, and every
/// broken rule is collected into the verdict.
pub fn validate(
    signature: &CallableSignature,
    doc: Option<&DocumentationBlock>,
) -> Result<Verdict, MalformedTag> {
    let name = signature.id.to_string();

    let Some(doc) = doc else {
        return Ok(Verdict::from_violations(vec![Violation {
            kind: ViolationKind::MissingDocComment,
            message: format!("The docblock for `{name}` should not be missing."),
        }]));
    };

    let mut violations = Vec::new();

    if doc.summary.trim().is_empty() {
        violations.push(Violation {
            kind: ViolationKind::EmptyShortDescription,
            message: format!("The docblock description for `{name}` should not be empty."),
        });
    }

    if signature.parameters.len() != doc.param_tags.len() {
        violations.push(Violation {
            kind: ViolationKind::ParamCountMismatch,
            message: format!(
                "The number of @param docs for `{name}` should match its number of parameters \
                 ({} parameters, {} @param docs).",
                signature.parameters.len(),
                doc.param_tags.len(),
            ),
        });
        return Ok(Verdict::from_violations(violations));
    }

    for (param, tag) in signature.parameters.iter().zip(doc.param_tags.iter()) {
        check_parameter(&name, param, tag, &mut violations)?;
    }

    Ok(Verdict::from_violations(violations))
}

/// Run the per-parameter rule set for one (parameter, tag) pair.
fn check_parameter(
    callable: &str,
    param: &ParameterSignature,
    tag: &ParamTag,
    violations: &mut Vec<Violation>,
) -> Result<(), MalformedTag> {
    let name = format!("${}", param.name);
    let (doc_type, doc_name) = split_tag(callable, &tag.raw)?;
    let description = effective_description(&tag.description);

    if description.is_empty() {
        violations.push(Violation {
            kind: ViolationKind::EmptyParamDescription,
            message: format!(
                "The @param description for the `{name}` parameter of `{callable}` should not be empty."
            ),
        });
    }

    // Positional check: catches parameter-order drift between code and
    // docs as well as plain misspellings.
    if doc_name != name {
        violations.push(Violation {
            kind: ViolationKind::ParamNameMismatch,
            message: format!(
                "The @param name for the `{name}` parameter of `{callable}` is incorrect."
            ),
        });
    }

    if param.is_array && !doc_type.contains("array") {
        violations.push(Violation {
            kind: ViolationKind::MissingArrayTypeHint,
            message: format!(
                "The @param type hint for the `{name}` parameter of `{callable}` should state \
                 that it accepts an array."
            ),
        });
    }

    if let Some(class_name) = param.class_name.as_deref()
        && class_name != GENERIC_OBJECT
        && !doc_type.contains(class_name)
    {
        violations.push(Violation {
            kind: ViolationKind::MissingClassTypeHint,
            message: format!(
                "The @param type hint for the `{name}` parameter of `{callable}` should state \
                 that it accepts an object of type `{class_name}`."
            ),
        });
    }

    // `callback` is a deprecated alias and is rejected regardless of the
    // parameter's actual type.
    if doc_type.contains("callback") {
        violations.push(Violation {
            kind: ViolationKind::ForbiddenCallbackToken,
            message: format!(
                "`callback` is not a valid type. `callable` should be used in the @param type \
                 hint for the `{name}` parameter of `{callable}` instead."
            ),
        });
    }

    if param.is_callable && !doc_type.contains("callable") {
        violations.push(Violation {
            kind: ViolationKind::MissingCallableTypeHint,
            message: format!(
                "The @param type hint for the `{name}` parameter of `{callable}` should state \
                 that it accepts a callable."
            ),
        });
    }

    if param.is_optional {
        if !description.contains("Optional.") {
            violations.push(Violation {
                kind: ViolationKind::MissingOptionalMarker,
                message: format!(
                    "The @param description for the optional `{name}` parameter of `{callable}` \
                     should state that it is optional."
                ),
            });
        }
    } else if description.contains("Optional.") {
        violations.push(Violation {
            kind: ViolationKind::SpuriousOptionalMarker,
            message: format!(
                "The @param description for the required `{name}` parameter of `{callable}` \
                 should not state that it is optional."
            ),
        });
    }

    let narrated_default = param
        .default
        .as_ref()
        .is_some_and(|default| !default.is_empty_array);
    if narrated_default {
        if !description.contains("Default ") {
            violations.push(Violation {
                kind: ViolationKind::MissingDefaultValueNote,
                message: format!(
                    "The @param description for the `{name}` parameter of `{callable}` should \
                     state its default value."
                ),
            });
        }
    } else if description.contains("Default ") {
        violations.push(Violation {
            kind: ViolationKind::SpuriousDefaultValueNote,
            message: format!(
                "The @param description for the `{name}` parameter of `{callable}` should not \
                 state a default value."
            ),
        });
    }

    Ok(())
}

/// Split a tag's raw content into its type token and its `$name` token.
fn split_tag(callable: &str, raw: &str) -> Result<(String, String), MalformedTag> {
    let mut tokens = raw.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(doc_type), Some(doc_name), None) => {
            Ok((doc_type.to_string(), doc_name.to_string()))
        }
        _ => Err(MalformedTag {
            callable: callable.to_string(),
            raw: raw.to_string(),
        }),
    }
}

/// Resolve the description the substring rules run against.
///
/// A hash-style description (`{` ... `}`) documents an associative-array
/// parameter with a per-key breakdown; its flat sentence is the second
/// line, so that line becomes the effective description. A one-line
/// `{...}` has no second line and resolves to an empty description (it
/// then fails the non-empty rule rather than faulting).
fn effective_description(description: &str) -> &str {
    let trimmed = description.trim();
    if trimmed.len() > 1 && trimmed.starts_with('{') && trimmed.ends_with('}') {
        trimmed.lines().nth(1).map(str::trim).unwrap_or("")
    } else {
        trimmed
    }
}
