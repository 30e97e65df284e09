//! Text annotated with nested, addressable regions
//!
//! A structured string is built by appending text inside nested regions.
//! Each region owns some client data (for formulas, the path of the
//! sub-formula it renders) and may mark one contiguous "dominant" span: the
//! text the region renders itself, as opposed to text its children render.
//! After `build`, a character inside a dominant span maps to the region
//! owning that span; characters outside every dominant span (separators,
//! grouping) map to no region. Both lookups, and the lookup of the innermost
//! enclosing region, take constant time.
//!
//! All offsets are in characters, not bytes.

use crate::error::AddressingError;
use std::ops::Range;

/// Half-open character range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<T> {
    /// Everything this region and its children render
    pub span: Span,
    /// The region's own text, if marked
    pub dominant: Option<Span>,
    /// Enclosing region index
    pub parent: Option<usize>,
    pub depth: usize,
    pub client_data: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredString<T> {
    text: String,
    /// Byte offset of each character, plus one past the end
    boundaries: Vec<usize>,
    regions: Vec<Region<T>>,
    /// Region whose dominant span covers each character
    owners: Vec<Option<usize>>,
    /// Innermost open region per character
    enclosing: Vec<Option<usize>>,
}

impl<T> StructuredString<T> {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Regions in the order they were opened; the outermost comes first
    pub fn regions(&self) -> &[Region<T>] {
        &self.regions
    }

    pub fn region(&self, idx: usize) -> Option<&Region<T>> {
        self.regions.get(idx)
    }

    /// Index of the region whose dominant span covers `offset`
    pub fn region_index_at(&self, offset: usize) -> Option<usize> {
        self.owners.get(offset).copied().flatten()
    }

    /// Region whose dominant span covers `offset`
    pub fn region_at(&self, offset: usize) -> Option<&Region<T>> {
        self.region_index_at(offset).map(|idx| &self.regions[idx])
    }

    /// Client data of the region whose dominant span covers `offset`
    pub fn client_data_at(&self, offset: usize) -> Option<&T> {
        self.region_at(offset).map(|r| &r.client_data)
    }

    /// Innermost region whose full span contains `offset`, dominant or not.
    /// Resolves separators and grouping characters to the enclosing node.
    pub fn enclosing_region_at(&self, offset: usize) -> Option<&Region<T>> {
        self.enclosing
            .get(offset)
            .copied()
            .flatten()
            .map(|idx| &self.regions[idx])
    }

    pub fn enclosing_client_data_at(&self, offset: usize) -> Option<&T> {
        self.enclosing_region_at(offset).map(|r| &r.client_data)
    }

    /// Text covered by a character span
    pub fn slice(&self, span: Span) -> &str {
        let end = span.end.min(self.len());
        let start = span.start.min(end);
        &self.text[self.boundaries[start]..self.boundaries[end]]
    }

    pub fn region_text(&self, region: &Region<T>) -> &str {
        self.slice(region.span)
    }

    pub fn dominant_text(&self, region: &Region<T>) -> Option<&str> {
        region.dominant.map(|span| self.slice(span))
    }
}

/// Incremental builder for a `StructuredString`
#[derive(Debug)]
pub struct StructuredStringBuilder<T> {
    text: String,
    boundaries: Vec<usize>,
    regions: Vec<Region<T>>,
    owners: Vec<Option<usize>>,
    enclosing: Vec<Option<usize>>,
    open: Vec<usize>,
    dominant: Option<usize>,
}

impl<T> Default for StructuredStringBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StructuredStringBuilder<T> {
    pub fn new() -> Self {
        StructuredStringBuilder {
            text: String::new(),
            boundaries: vec![0],
            regions: Vec::new(),
            owners: Vec::new(),
            enclosing: Vec::new(),
            open: Vec::new(),
            dominant: None,
        }
    }

    fn position(&self) -> usize {
        self.owners.len()
    }

    /// Open a region nested in the current one
    pub fn begin_region(&mut self, client_data: T) {
        let at = self.position();
        let parent = self.open.last().copied();
        self.regions.push(Region {
            span: Span { start: at, end: at },
            dominant: None,
            parent,
            depth: self.open.len(),
            client_data,
        });
        self.open.push(self.regions.len() - 1);
    }

    /// Close the innermost open region
    pub fn end_region(&mut self) -> Result<(), AddressingError> {
        let idx = *self.open.last().ok_or(AddressingError::NoOpenRegion)?;
        if self.dominant == Some(idx) {
            return Err(AddressingError::UnclosedDominant);
        }
        self.open.pop();
        self.regions[idx].span.end = self.position();
        Ok(())
    }

    /// Start the dominant span of the innermost open region. Only one
    /// dominant span may be open at a time and each region has at most one.
    pub fn begin_dominant(&mut self) -> Result<(), AddressingError> {
        let idx = *self.open.last().ok_or(AddressingError::NoOpenRegion)?;
        if self.dominant.is_some() || self.regions[idx].dominant.is_some() {
            return Err(AddressingError::OverlappingDominant);
        }
        let at = self.position();
        self.regions[idx].dominant = Some(Span { start: at, end: at });
        self.dominant = Some(idx);
        Ok(())
    }

    pub fn end_dominant(&mut self) -> Result<(), AddressingError> {
        let idx = self.dominant.take().ok_or(AddressingError::NoOpenDominant)?;
        let at = self.position();
        if let Some(span) = self.regions[idx].dominant.as_mut() {
            span.end = at;
        }
        Ok(())
    }

    /// Append text inside the innermost open region. Only text written
    /// while a dominant span is open gets an owner.
    pub fn append(&mut self, text: &str) {
        let inner = self.open.last().copied();
        for c in text.chars() {
            self.text.push(c);
            self.boundaries.push(self.text.len());
            self.owners.push(self.dominant);
            self.enclosing.push(inner);
        }
    }

    /// Append text as the whole dominant span of the innermost open region
    pub fn append_dominant(&mut self, text: &str) -> Result<(), AddressingError> {
        self.begin_dominant()?;
        self.append(text);
        self.end_dominant()
    }

    /// Finish; every region and dominant span must be closed
    pub fn build(self) -> Result<StructuredString<T>, AddressingError> {
        if self.dominant.is_some() {
            return Err(AddressingError::UnclosedDominant);
        }
        if !self.open.is_empty() {
            return Err(AddressingError::UnclosedRegion(self.open.len()));
        }
        Ok(StructuredString {
            text: self.text,
            boundaries: self.boundaries,
            regions: self.regions,
            owners: self.owners,
            enclosing: self.enclosing,
        })
    }
}
