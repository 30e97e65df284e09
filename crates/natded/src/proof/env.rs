//! Nesting scopes
//!
//! The scope stack is a vector indexed by nesting level. Each scope lists
//! the citations created at its level: plain steps, and the ranges of
//! sub-proofs closed while it was current.

use super::step::Citation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub citations: Vec<Citation>,
}

impl Scope {
    /// Step range covered by everything recorded in this scope
    pub fn range(&self) -> Option<(usize, usize)> {
        let first = self.citations.first()?.first();
        let last = self.citations.last()?.last();
        Some((first, last))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    scopes: Vec<Scope>,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    /// A single top-level scope
    pub fn new() -> Self {
        Env {
            scopes: vec![Scope::default()],
        }
    }

    /// Current nesting depth; 0 is the outermost proof
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    fn current_mut(&mut self) -> &mut Scope {
        let depth = self.depth();
        &mut self.scopes[depth]
    }

    pub fn current(&self) -> &Scope {
        &self.scopes[self.depth()]
    }

    pub fn record(&mut self, citation: Citation) {
        self.current_mut().citations.push(citation);
    }

    pub fn push(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Close the current scope; the outermost scope is never popped
    pub fn pop(&mut self) -> Option<Scope> {
        if self.depth() == 0 {
            return None;
        }
        self.scopes.pop()
    }

    /// Citations usable at the current depth: plain steps from every
    /// enclosing scope, then everything recorded in the current scope.
    pub fn available(&self) -> Vec<Citation> {
        let depth = self.depth();
        let mut out = Vec::new();
        for scope in &self.scopes[..depth] {
            out.extend(scope.citations.iter().filter(|c| !c.is_sub_proof()));
        }
        out.extend(self.scopes[depth].citations.iter().copied());
        out
    }

    pub fn is_visible(&self, citation: &Citation) -> bool {
        let depth = self.depth();
        self.scopes[..depth]
            .iter()
            .any(|s| !citation.is_sub_proof() && s.citations.contains(citation))
            || self.scopes[depth].citations.contains(citation)
    }
}
