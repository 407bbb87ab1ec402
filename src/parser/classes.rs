//! Class, interface, trait, and enum method extraction.
//!
//! Every concrete or abstract method of every class-like declaration is
//! collected as a `Class::method` callable. Interface and abstract
//! methods have no body but still carry a signature and (often) a
//! docblock, so they are checked like any other method.

use mago_syntax::ast::*;

use crate::types::{CallableDecl, CallableId, CallableSignature};

use super::DocblockCtx;

/// Recursively collect methods from class-like declarations, including
/// those nested inside namespace blocks.
pub(crate) fn collect_methods<'a>(
    statements: impl Iterator<Item = &'a Statement<'a>>,
    callables: &mut Vec<CallableDecl>,
    ctx: &DocblockCtx<'a>,
) {
    for statement in statements {
        match statement {
            Statement::Class(class) => {
                let class_name = class.name.value.to_string();
                collect_members(&class_name, class.members.iter(), callables, ctx);
            }
            Statement::Interface(iface) => {
                let iface_name = iface.name.value.to_string();
                collect_members(&iface_name, iface.members.iter(), callables, ctx);
            }
            Statement::Trait(trait_def) => {
                let trait_name = trait_def.name.value.to_string();
                collect_members(&trait_name, trait_def.members.iter(), callables, ctx);
            }
            Statement::Enum(enum_def) => {
                let enum_name = enum_def.name.value.to_string();
                collect_members(&enum_name, enum_def.members.iter(), callables, ctx);
            }
            Statement::Namespace(namespace) => {
                collect_methods(namespace.statements().iter(), callables, ctx);
            }
            _ => {}
        }
    }
}

/// Collect every method member of one class-like declaration.
fn collect_members<'a>(
    class_name: &str,
    members: impl Iterator<Item = &'a ClassLikeMember<'a>>,
    callables: &mut Vec<CallableDecl>,
    ctx: &DocblockCtx<'a>,
) {
    for member in members {
        if let ClassLikeMember::Method(method) = member {
            let method_name = method.name.value.to_string();
            let parameters = super::extract_parameters(&method.parameter_list, ctx.content);

            callables.push(CallableDecl {
                signature: CallableSignature {
                    id: CallableId::method(class_name, method_name),
                    parameters,
                },
                docblock: ctx.docblock_for(method),
            });
        }
    }
}
