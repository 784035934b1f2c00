//! Rendering targets, the places composed drawings are attached to
use crate::{Drawing, GraphError};
use std::{collections::HashMap, fmt, io::Write};

/// Capability to accept composed drawings
///
/// Once attached the drawing is owned by the target.
pub trait RenderTarget {
    fn attach(&mut self, drawing: Drawing);
}

impl RenderTarget for Vec<Drawing> {
    fn attach(&mut self, drawing: Drawing) {
        self.push(drawing)
    }
}

/// In memory document, keeps attached drawings in attachment order
///
/// Displayed as an HTML body containing every drawing as inline SVG.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    drawings: Vec<Drawing>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    /// Identifiers defined by more than one drawing
    ///
    /// Drawing identifiers are random and may collide, in which case references
    /// inside of the document become ambiguous.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for drawing in self.drawings.iter() {
            for id in drawing.ids() {
                *counts.entry(id).or_default() += 1;
            }
        }
        let mut duplicates: Vec<_> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id.to_string())
            .collect();
        duplicates.sort();
        duplicates
    }

    /// Save document as HTML body
    pub fn save(&self, mut out: impl Write) -> Result<(), GraphError> {
        write!(&mut out, "{}", self)?;
        Ok(())
    }
}

impl RenderTarget for SvgDocument {
    fn attach(&mut self, drawing: Drawing) {
        tracing::debug!(id = drawing.id(), "[attach]");
        self.drawings.push(drawing)
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<body>")?;
        for drawing in self.drawings.iter() {
            write!(f, "{}", drawing)?;
        }
        writeln!(f, "</body>")
    }
}
