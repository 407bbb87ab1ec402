//! The check harness: source interfaces, the in-memory source index, and
//! the per-callable driver.
//!
//! The validator itself only sees two value objects per call. This module
//! supplies them: [`SignatureSource`] and [`DocumentationSource`] are the
//! seams a caller can implement against a precomputed signature table or
//! any other backend, and [`SourceIndex`] is the built-in implementation
//! backed by the PHP parser. [`Checker`] drives the validator over a
//! caller-supplied id or over every indexed callable in discovery order.

use std::collections::HashMap;

use thiserror::Error;

use crate::docblock;
use crate::parser;
use crate::types::{CallableId, CallableSignature, DocumentationBlock, Verdict};
use crate::validator::{self, MalformedTag};

/// A lookup failure from a signature or documentation source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("the callable `{0}` doesn't exist")]
    NotFound(String),
}

/// Supplies, for a callable id, its ordered parameter list with
/// per-parameter metadata.
pub trait SignatureSource {
    fn signature(&self, id: &CallableId) -> Result<&CallableSignature, SourceError>;
}

/// Supplies, for a callable id, its parsed documentation. `Ok(None)`
/// means the callable exists but has no doc comment attached.
pub trait DocumentationSource {
    fn documentation(&self, id: &CallableId) -> Result<Option<DocumentationBlock>, SourceError>;
}

struct IndexedCallable {
    signature: CallableSignature,
    docblock: Option<String>,
}

/// An in-memory index over parsed PHP files, implementing both source
/// interfaces. Callables are kept in discovery order; a duplicate id
/// keeps its first registration.
#[derive(Default)]
pub struct SourceIndex {
    order: Vec<CallableId>,
    entries: HashMap<CallableId, IndexedCallable>,
}

impl SourceIndex {
    pub fn new() -> Self {
        SourceIndex::default()
    }

    /// Parse one PHP file's content and register every callable found.
    pub fn add_file(&mut self, content: &str) {
        for decl in parser::parse_callables(content) {
            let id = decl.signature.id.clone();
            if self.entries.contains_key(&id) {
                continue;
            }
            self.order.push(id.clone());
            self.entries.insert(
                id,
                IndexedCallable {
                    signature: decl.signature,
                    docblock: decl.docblock,
                },
            );
        }
    }

    pub fn from_php(content: &str) -> Self {
        let mut index = SourceIndex::new();
        index.add_file(content);
        index
    }

    /// Every indexed callable id, in discovery order.
    pub fn callables(&self) -> impl Iterator<Item = &CallableId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn entry(&self, id: &CallableId) -> Result<&IndexedCallable, SourceError> {
        self.entries
            .get(id)
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}

impl SignatureSource for SourceIndex {
    fn signature(&self, id: &CallableId) -> Result<&CallableSignature, SourceError> {
        Ok(&self.entry(id)?.signature)
    }
}

impl DocumentationSource for SourceIndex {
    fn documentation(&self, id: &CallableId) -> Result<Option<DocumentationBlock>, SourceError> {
        Ok(self.entry(id)?.docblock.as_deref().map(docblock::parse))
    }
}

/// A failure that prevented a verdict from being produced at all. Both
/// variants are data-quality faults, distinct from documentation-style
/// violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    MalformedTag(#[from] MalformedTag),
}

/// The result of checking one callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableCheck {
    pub id: CallableId,
    pub result: Result<Verdict, CheckError>,
}

/// Drives the validator over callables supplied by a source.
pub struct Checker<S> {
    source: S,
}

impl<S> Checker<S>
where
    S: SignatureSource + DocumentationSource,
{
    pub fn new(source: S) -> Self {
        Checker { source }
    }

    /// Validate one callable by id.
    pub fn check(&self, id: &CallableId) -> Result<Verdict, CheckError> {
        let signature = self.source.signature(id)?;
        let doc = self.source.documentation(id)?;
        let verdict = validator::validate(signature, doc.as_ref())?;
        Ok(verdict)
    }
}

impl Checker<SourceIndex> {
    /// Build a checker over a single PHP file's content.
    pub fn from_php(content: &str) -> Self {
        Checker::new(SourceIndex::from_php(content))
    }

    /// Validate every indexed callable, in discovery order.
    pub fn check_all(&self) -> Vec<CallableCheck> {
        self.source
            .callables()
            .map(|id| CallableCheck {
                id: id.clone(),
                result: self.check(id),
            })
            .collect()
    }

    pub fn index(&self) -> &SourceIndex {
        &self.source
    }
}
