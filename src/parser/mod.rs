//! PHP parsing and callable extraction.
//!
//! This module parses PHP source text with the mago_syntax parser and
//! extracts one [`CallableDecl`] per discovered callable: standalone
//! functions and class-like methods, each paired with the raw text of the
//! docblock immediately preceding it.
//!
//! Sub-modules:
//! - [`functions`]: standalone function extraction
//! - [`classes`]: class, interface, trait, and enum method extraction

mod classes;
mod functions;

use mago_span::HasSpan;
use mago_syntax::ast::*;
use tracing::error;

use crate::docblock::docblock_before;
use crate::types::{CallableDecl, DefaultValue, ParameterSignature};

/// Context for looking up the docblock that documents an AST node.
///
/// Bundles the program's trivia (comments/whitespace) and the raw source
/// text so extraction functions can find the `/** ... */` comment
/// preceding any callable.
pub(crate) struct DocblockCtx<'a> {
    pub trivias: &'a [Trivia<'a>],
    pub content: &'a str,
}

impl DocblockCtx<'_> {
    /// The raw docblock text documenting `node`, if any.
    fn docblock_for(&self, node: &impl HasSpan) -> Option<String> {
        docblock_before(self.trivias, self.content, node).map(str::to_string)
    }
}

/// Parse PHP source text and extract every callable declaration.
///
/// Standalone functions come first (in source order), then class-like
/// methods, matching the order a test harness would enumerate them in.
/// A parser panic is contained: the file is logged and skipped rather
/// than aborting the whole run.
pub fn parse_callables(content: &str) -> Vec<CallableDecl> {
    let content_owned = content.to_string();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let arena = bumpalo::Bump::new();
        let file_id = mago_database::file::FileId::new("input.php");
        let program = mago_syntax::parser::parse_file_content(&arena, file_id, &content_owned);

        let ctx = DocblockCtx {
            trivias: program.trivia.as_slice(),
            content: &content_owned,
        };

        let mut callables = Vec::new();
        functions::collect_functions(program.statements.iter(), &mut callables, &ctx);
        classes::collect_methods(program.statements.iter(), &mut callables, &ctx);
        callables
    }));

    match result {
        Ok(callables) => callables,
        Err(_) => {
            error!("parser panicked; no callables extracted from this file");
            Vec::new()
        }
    }
}

/// Classification of a native parameter type hint, reduced to the three
/// facts the validator cares about.
#[derive(Default)]
struct HintInfo {
    is_array: bool,
    is_callable: bool,
    class_name: Option<String>,
}

/// Classify a type hint. `?T` unwraps to `T`; union and intersection
/// hints are left unclassified, mirroring PHP reflection where
/// `isArray()` / `isCallable()` / `getClass()` only report plain hints.
fn classify_hint(hint: &Hint) -> HintInfo {
    match hint {
        Hint::Array(_) => HintInfo {
            is_array: true,
            ..HintInfo::default()
        },
        Hint::Callable(_) => HintInfo {
            is_callable: true,
            ..HintInfo::default()
        },
        Hint::Identifier(ident) => {
            let name = ident.value().trim_start_matches('\\').to_string();
            HintInfo {
                class_name: Some(name),
                ..HintInfo::default()
            }
        }
        Hint::Nullable(nullable) => classify_hint(nullable.hint),
        _ => HintInfo::default(),
    }
}

/// Extract parameter signatures from a callable's parameter list.
///
/// `content` is the full source text, used to slice each default value's
/// expression so the empty-array sentinel (`[]` / `array()`) can be
/// recognized.
pub(crate) fn extract_parameters(
    parameter_list: &FunctionLikeParameterList,
    content: &str,
) -> Vec<ParameterSignature> {
    parameter_list
        .parameters
        .iter()
        .map(|param| {
            let raw_name = param.variable.name.to_string();
            let name = raw_name.strip_prefix('$').unwrap_or(&raw_name).to_string();
            let is_variadic = param.ellipsis.is_some();

            let hint = param
                .hint
                .as_ref()
                .map(classify_hint)
                .unwrap_or_default();

            let default = param.default_value.as_ref().map(|dv| {
                let span = dv.span();
                let text = content
                    .get(span.start.offset as usize..span.end.offset as usize)
                    .unwrap_or("");
                // The span covers `= expr`; keep only the expression.
                let raw = text
                    .trim_start()
                    .strip_prefix('=')
                    .unwrap_or(text)
                    .trim()
                    .to_string();
                let is_empty_array = is_empty_array_literal(&raw);
                DefaultValue {
                    raw,
                    is_empty_array,
                }
            });

            // PHP reflection's isOptional(): a default makes the argument
            // omittable, and so does variadic-ness.
            let is_optional = default.is_some() || is_variadic;

            ParameterSignature {
                name,
                is_array: hint.is_array,
                is_callable: hint.is_callable,
                class_name: hint.class_name,
                is_optional,
                default,
            }
        })
        .collect()
}

/// Whether a default-value expression is the empty-array literal, in
/// either syntax, regardless of interior whitespace.
fn is_empty_array_literal(raw: &str) -> bool {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact == "[]" || compact == "array()"
}
