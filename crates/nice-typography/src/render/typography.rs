//! The Typography component.

use crate::config::{IntentDefaults, TokenMode};
use crate::emit::{DeclarationBlock, Emitter};
use crate::intent::{Align, ElementKind, LetterSpacing, LineHeight, MaxWidth, Status, StyleIntent};
use crate::resolve::{resolve_with, ResolvedStyle};
use crate::tokens::TokenLookup;

/// A run of text with its style intent.
///
/// Every style input is optional; only the text content is required.
///
/// # Example
///
/// ```rust
/// use nice_typography::{ElementKind, Renderer, Status, TokenRegistry, Typography};
///
/// let renderer = Renderer::new(TokenRegistry::with_defaults()).unwrap();
///
/// let heading = Typography::new("Main Heading").element(ElementKind::H1);
/// let html = renderer.render(&heading).unwrap();
/// assert!(html.starts_with("<h1 style=\"margin: 0;"));
/// assert!(html.ends_with(">Main Heading</h1>"));
///
/// let error = Typography::new("Something went wrong").status(Status::Error);
/// let html = renderer.render(&error).unwrap();
/// assert!(html.contains("color: var(--status-color-error);"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typography {
    children: String,
    intent: StyleIntent,
}

impl Typography {
    /// Creates a paragraph of text with no style inputs set.
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            intent: StyleIntent::default(),
        }
    }

    /// Creates a component from an already-built intent.
    pub fn with_intent(children: impl Into<String>, intent: StyleIntent) -> Self {
        Self {
            children: children.into(),
            intent,
        }
    }

    pub fn children(&self) -> &str {
        &self.children
    }

    pub fn intent(&self) -> &StyleIntent {
        &self.intent
    }

    /// Sets the element to render (`as` in props).
    pub fn element(mut self, element: ElementKind) -> Self {
        self.intent = self.intent.element(element);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.intent = self.intent.align(align);
        self
    }

    pub fn antialiased(mut self, antialiased: bool) -> Self {
        self.intent = self.intent.antialiased(antialiased);
        self
    }

    pub fn legibility_optimized(mut self, optimized: bool) -> Self {
        self.intent = self.intent.legibility_optimized(optimized);
        self
    }

    pub fn code(mut self, code: bool) -> Self {
        self.intent = self.intent.code(code);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.intent = self.intent.color(color);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.intent = self.intent.status(status);
        self
    }

    pub fn line_height(mut self, line_height: LineHeight) -> Self {
        self.intent = self.intent.line_height(line_height);
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.intent = self.intent.size(size);
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.intent = self.intent.weight(weight);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.intent = self.intent.class_name(class_name);
        self
    }

    pub fn letter_spacing(mut self, spacing: LetterSpacing) -> Self {
        self.intent = self.intent.letter_spacing(spacing);
        self
    }

    pub fn max_width(mut self, max_width: MaxWidth) -> Self {
        self.intent = self.intent.max_width(max_width);
        self
    }

    /// Resolves the intent with the built-in defaults.
    pub fn resolve(&self) -> ResolvedStyle {
        self.resolve_with(&IntentDefaults::default())
    }

    pub fn resolve_with(&self, defaults: &IntentDefaults) -> ResolvedStyle {
        resolve_with(&self.intent, defaults)
    }

    /// Resolves with the built-in defaults and emits declarations.
    pub fn declarations(&self, tokens: &dyn TokenLookup, mode: TokenMode) -> DeclarationBlock {
        Emitter::new(tokens, mode).emit(&self.resolve())
    }
}
