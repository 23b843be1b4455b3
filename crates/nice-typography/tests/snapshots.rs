//! Snapshot tests for emitted CSS.

use nice_typography::{
    ElementKind, IntentDefaults, Renderer, TokenMode, TokenRegistry, Typography,
};

fn renderer(mode: TokenMode) -> Renderer {
    Renderer::with_options(TokenRegistry::with_defaults(), IntentDefaults::default(), mode)
        .unwrap()
}

#[test]
fn test_paragraph_rule_reference_mode() {
    let css = renderer(TokenMode::Reference).stylesheet("p", &Typography::new("Body"));

    insta::assert_snapshot!(css.trim_end(), @r#"
    p {
      margin: 0;
      font-family: var(--font-family-base, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif);
      font-size: var(--typography-size-default, 1rem);
      font-size: 1rem;
      line-height: var(--line-height-default, 1.5);
    }
    "#);
}

#[test]
fn test_heading_rule_inline_mode() {
    let css = renderer(TokenMode::Inline).stylesheet(
        "h1.title",
        &Typography::new("Title").element(ElementKind::H1),
    );

    insta::assert_snapshot!(css.trim_end(), @r#"
    h1.title {
      margin: 0;
      font-family: system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
      font-size: 2rem;
      font-size: 2rem;
      font-weight: 600;
      line-height: 1.25;
    }
    "#);
}
