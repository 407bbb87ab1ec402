#![allow(dead_code)]

use phpdoc_standards::checker::{CallableCheck, Checker};
use phpdoc_standards::types::{
    CallableId, CallableSignature, DocumentationBlock, ParamTag, ParameterSignature, Verdict,
    ViolationKind,
};

/// Parse a PHP snippet and check every callable in it.
pub fn check_php(content: &str) -> Vec<CallableCheck> {
    Checker::from_php(content).check_all()
}

/// Find the check result for one callable by its display name.
pub fn result_for<'a>(checks: &'a [CallableCheck], display: &str) -> &'a CallableCheck {
    checks
        .iter()
        .find(|check| check.id.to_string() == display)
        .unwrap_or_else(|| panic!("no check result for `{display}`"))
}

/// A required, untyped, default-less parameter.
pub fn required(name: &str) -> ParameterSignature {
    ParameterSignature {
        name: name.to_string(),
        ..ParameterSignature::default()
    }
}

pub fn function_signature(name: &str, parameters: Vec<ParameterSignature>) -> CallableSignature {
    CallableSignature {
        id: CallableId::function(name),
        parameters,
    }
}

pub fn tag(raw: &str, description: &str) -> ParamTag {
    ParamTag {
        raw: raw.to_string(),
        description: description.to_string(),
    }
}

pub fn doc(summary: &str, param_tags: Vec<ParamTag>) -> DocumentationBlock {
    DocumentationBlock {
        summary: summary.to_string(),
        param_tags,
    }
}

/// The violation kinds of a verdict, in reported order.
pub fn kinds(verdict: &Verdict) -> Vec<ViolationKind> {
    verdict.violations().iter().map(|v| v.kind).collect()
}
