//! HTML rendering of [`Typography`] components.

use minijinja::{context, Environment};

use super::error::RenderError;
use super::typography::Typography;
use crate::config::{IntentDefaults, TokenMode, TypographyConfig};
use crate::emit::{DeclarationBlock, Emitter};
use crate::resolve::ResolvedStyle;
use crate::tokens::{TokenError, TokenRegistry};

// The `.html` suffix turns on HTML auto-escaping.
const TEMPLATE_NAME: &str = "typography.html";

const TEMPLATE: &str = r#"<{{ tag }}{% if class_name %} class="{{ class_name }}"{% endif %} style="{{ style }}">{{ children }}</{{ tag }}>"#;

/// Renders components to HTML with a fixed token registry.
///
/// Token aliases are validated when the renderer is built, so a renderer
/// never emits a reference that dangles inside its own registry.
///
/// # Example
///
/// ```rust
/// use nice_typography::{Renderer, TokenCategory, TokenRegistry, Typography};
///
/// let mut tokens = TokenRegistry::with_defaults();
/// tokens.insert(TokenCategory::StatusColor, "success", "#2e7d32");
///
/// let renderer = Renderer::new(tokens).unwrap();
/// let html = renderer
///     .render(&Typography::new("Saved").class_name("toast"))
///     .unwrap();
///
/// assert!(html.starts_with(r#"<p class="toast" style="margin: 0;"#));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    tokens: TokenRegistry,
    defaults: IntentDefaults,
    mode: TokenMode,
}

impl Renderer {
    /// Creates a renderer with the built-in defaults and reference mode.
    ///
    /// # Errors
    ///
    /// Returns an error if any token alias is invalid (dangling or cyclic).
    pub fn new(tokens: TokenRegistry) -> Result<Self, RenderError> {
        Self::with_options(tokens, IntentDefaults::default(), TokenMode::Reference)
    }

    /// Creates a renderer with explicit defaults and token mode.
    ///
    /// # Errors
    ///
    /// Returns an error if any token alias is invalid (dangling or cyclic).
    pub fn with_options(
        tokens: TokenRegistry,
        defaults: IntentDefaults,
        mode: TokenMode,
    ) -> Result<Self, RenderError> {
        tokens.validate().map_err(TokenError::from)?;

        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;

        tracing::debug!(tokens = tokens.len(), ?mode, "created typography renderer");
        Ok(Self {
            env,
            tokens,
            defaults,
            mode,
        })
    }

    /// Creates a renderer from configuration, loading its token file.
    pub fn from_config(config: &TypographyConfig) -> Result<Self, RenderError> {
        let tokens = config.token_registry()?;
        Self::with_options(tokens, config.defaults, config.token_mode)
    }

    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    pub fn defaults(&self) -> &IntentDefaults {
        &self.defaults
    }

    pub fn mode(&self) -> TokenMode {
        self.mode
    }

    /// Resolves a component with this renderer's defaults.
    pub fn resolve(&self, typography: &Typography) -> ResolvedStyle {
        typography.resolve_with(&self.defaults)
    }

    pub fn declarations(&self, typography: &Typography) -> DeclarationBlock {
        Emitter::new(&self.tokens, self.mode).emit(&self.resolve(typography))
    }

    /// Renders a component as a single HTML element with an inline style.
    ///
    /// Text content and attribute values are HTML-escaped.
    pub fn render(&self, typography: &Typography) -> Result<String, RenderError> {
        let style = self.resolve(typography);
        let block = Emitter::new(&self.tokens, self.mode).emit(&style);

        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        Ok(tmpl.render(context! {
            tag => style.element.tag(),
            class_name => style.class_name,
            style => block.to_inline(),
            children => typography.children(),
        })?)
    }

    /// Renders a component's declarations as a CSS rule for `selector`.
    pub fn stylesheet(&self, selector: &str, typography: &Typography) -> String {
        self.declarations(typography).to_rule(selector)
    }

    /// Renders every registered token as a `:root` custom property block.
    pub fn root_stylesheet(&self) -> String {
        self.tokens.root_stylesheet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::ElementKind;
    use crate::tokens::{TokenCategory, ValidationError};

    fn renderer() -> Renderer {
        Renderer::new(TokenRegistry::with_defaults()).unwrap()
    }

    #[test]
    fn test_render_span() {
        let html = renderer()
            .render(&Typography::new("inline").element(ElementKind::Span))
            .unwrap();
        assert!(html.starts_with("<span style=\""));
        assert!(html.ends_with(">inline</span>"));
    }

    #[test]
    fn test_render_escapes_children() {
        let html = renderer()
            .render(&Typography::new("<script>alert(1)</script>"))
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_escapes_class_name() {
        let html = renderer()
            .render(&Typography::new("x").class_name("a\" onclick=\"b"))
            .unwrap();
        assert!(!html.contains("\" onclick=\""));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_render_without_class_omits_attribute() {
        let html = renderer().render(&Typography::new("x")).unwrap();
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_renderer_fails_with_invalid_tokens() {
        let tokens = TokenRegistry::new().add(TokenCategory::FontFamily, "heading", "var(--nope)");
        let result = Renderer::new(tokens);
        assert!(matches!(
            result,
            Err(RenderError::Tokens(TokenError::Validation(
                ValidationError::UnresolvedAlias { .. }
            )))
        ));
    }

    #[test]
    fn test_renderer_applies_defaults() {
        let defaults = IntentDefaults {
            antialiased: true,
            ..IntentDefaults::default()
        };
        let renderer =
            Renderer::with_options(TokenRegistry::with_defaults(), defaults, TokenMode::Inline)
                .unwrap();

        let block = renderer.declarations(&Typography::new("x"));
        assert_eq!(block.last("-webkit-font-smoothing"), Some("antialiased"));
        assert_eq!(block.last("line-height"), Some("1.5"));

        let block = renderer.declarations(&Typography::new("x").antialiased(false));
        assert!(!block.contains("-webkit-font-smoothing"));
    }

    #[test]
    fn test_stylesheet_rule() {
        let renderer = Renderer::with_options(
            TokenRegistry::with_defaults(),
            IntentDefaults::default(),
            TokenMode::Inline,
        )
        .unwrap();
        let css = renderer.stylesheet(".caption", &Typography::new("x").size("0.875rem"));
        assert!(css.starts_with(".caption {\n  margin: 0;\n"));
        assert!(css.contains("  font-size: 0.875rem;\n  font-size: 0.875rem;\n"));
        assert!(css.ends_with("  line-height: 1.5;\n}\n"));
    }

    #[test]
    fn test_root_stylesheet_includes_defaults() {
        let css = renderer().root_stylesheet();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --typography-size-h1: 2rem;\n"));
        assert!(css.contains("  --line-height-condensed: 1.25;\n"));
    }
}
