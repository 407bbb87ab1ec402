//! Standalone function extraction.
//!
//! Walks the statement tree collecting every `function` declaration as a
//! [`CallableDecl`], recursing into namespace blocks, plain blocks, and
//! `if` bodies — the latter for the very common guard pattern:
//!
//! ```text
//! if ( ! function_exists( 'session' ) ) {
//!     function session( ... ) { ... }
//! }
//! ```

use mago_syntax::ast::*;

use crate::types::{CallableDecl, CallableId, CallableSignature};

use super::DocblockCtx;

/// Recursively collect standalone function declarations.
pub(crate) fn collect_functions<'a>(
    statements: impl Iterator<Item = &'a Statement<'a>>,
    callables: &mut Vec<CallableDecl>,
    ctx: &DocblockCtx<'a>,
) {
    for statement in statements {
        match statement {
            Statement::Function(func) => {
                let name = func.name.value.to_string();
                let parameters = super::extract_parameters(&func.parameter_list, ctx.content);

                callables.push(CallableDecl {
                    signature: CallableSignature {
                        id: CallableId::function(name),
                        parameters,
                    },
                    docblock: ctx.docblock_for(func),
                });
            }
            Statement::Namespace(namespace) => {
                collect_functions(namespace.statements().iter(), callables, ctx);
            }
            Statement::Block(block) => {
                collect_functions(block.statements.iter(), callables, ctx);
            }
            Statement::If(if_stmt) => {
                collect_functions_from_if_body(&if_stmt.body, callables, ctx);
            }
            _ => {}
        }
    }
}

/// Recurse into an `if` statement body, covering both brace-delimited and
/// colon-delimited forms, including `elseif` and `else` branches.
fn collect_functions_from_if_body<'a>(
    body: &'a IfBody<'a>,
    callables: &mut Vec<CallableDecl>,
    ctx: &DocblockCtx<'a>,
) {
    match body {
        IfBody::Statement(body) => {
            collect_functions(std::iter::once(body.statement), callables, ctx);
            for else_if in body.else_if_clauses.iter() {
                collect_functions(std::iter::once(else_if.statement), callables, ctx);
            }
            if let Some(else_clause) = &body.else_clause {
                collect_functions(std::iter::once(else_clause.statement), callables, ctx);
            }
        }
        IfBody::ColonDelimited(body) => {
            collect_functions(body.statements.iter(), callables, ctx);
            for else_if in body.else_if_clauses.iter() {
                collect_functions(else_if.statements.iter(), callables, ctx);
            }
            if let Some(else_clause) = &body.else_clause {
                collect_functions(else_clause.statements.iter(), callables, ctx);
            }
        }
    }
}
