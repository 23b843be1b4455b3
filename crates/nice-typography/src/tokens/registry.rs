//! Token registry with aliases and file loading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::defaults::DEFAULT_TOKENS;
use super::error::{TokenError, ValidationError};
use super::key::{Token, TokenCategory, TokenKey};
use super::reference::split_var_reference;
use super::TokenLookup;
use crate::emit::{Declaration, DeclarationBlock};
use crate::intent::StringOrNumber;

/// A collection of design-token values keyed by custom property name.
///
/// Values are either literals (`2rem`, `600`) or aliases to another
/// registered token (`var(--font-family-base)`), enabling layered tokens
/// where semantic names point at base values.
///
/// # Example
///
/// ```rust
/// use nice_typography::{TokenCategory, TokenRegistry};
///
/// let tokens = TokenRegistry::new()
///     .add(TokenCategory::ContentColor, "default", "#1a1a1a")
///     .add(TokenCategory::ContentColor, "primary", "var(--content-color-default)");
///
/// assert!(tokens.validate().is_ok());
/// assert_eq!(tokens.resolve_literal("--content-color-primary"), Some("#1a1a1a"));
/// ```
///
/// # Token files
///
/// Registries load from YAML or JSON maps of category to variant to value:
///
/// ```yaml
/// font-size:
///   h1: 2.5rem
/// font-weight:
///   heading: 700
/// status-color:
///   error: "#d32f2f"
/// ```
///
/// Bare numbers are stored as their canonical text, so `1.10` becomes
/// `1.1`. Quote a value to keep its exact spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRegistry {
    values: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct TokenFile(BTreeMap<TokenCategory, BTreeMap<String, StringOrNumber>>);

impl TokenRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in font, size, weight,
    /// line-height, letter-spacing and max-width tokens.
    pub fn with_defaults() -> Self {
        DEFAULT_TOKENS.clone()
    }

    /// Adds a token, returning the updated registry for chaining.
    pub fn add(mut self, category: TokenCategory, variant: &str, value: impl Into<String>) -> Self {
        self.insert(category, variant, value);
        self
    }

    /// Sets a token, replacing any previous value.
    pub fn insert(&mut self, category: TokenCategory, variant: &str, value: impl Into<String>) {
        self.values
            .insert(category.property_name(variant), value.into());
    }

    /// Sets a raw custom property, which aliases can point at even when it
    /// belongs to no category.
    pub fn insert_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the raw value registered for a custom property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Registered custom property names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Copies every token from `other` into this registry; `other` wins on
    /// conflicts.
    pub fn merge(&mut self, other: TokenRegistry) {
        self.values.extend(other.values);
    }

    /// Follows aliases from `name` to a literal value.
    ///
    /// An alias to an unregistered token resolves to its CSS fallback when
    /// it has one. Returns `None` if `name` is not registered, or if the
    /// alias chain dangles without a fallback or cycles.
    pub fn resolve_literal(&self, name: &str) -> Option<&str> {
        let mut value = self.values.get(name)?.as_str();
        let mut hops = 0;
        while let Some((target, fallback)) = split_var_reference(value) {
            hops += 1;
            if hops > self.values.len() {
                return None;
            }
            value = match self.values.get(&target) {
                Some(next) => next.as_str(),
                None => fallback?,
            };
        }
        Some(value)
    }

    /// Validates that every alias resolves to a registered token or carries
    /// a fallback, and that no alias chain loops.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for start in self.values.keys() {
            let mut path = vec![start.clone()];
            let mut current = start;
            while let Some((target, fallback)) = split_var_reference(&self.values[current]) {
                if path.contains(&target) {
                    path.push(target);
                    return Err(ValidationError::CycleDetected { path });
                }
                match self.values.get_key_value(&target) {
                    Some((key, _)) => {
                        path.push(target);
                        current = key;
                    }
                    None if fallback.is_some() => break,
                    None => {
                        return Err(ValidationError::UnresolvedAlias {
                            from: current.clone(),
                            to: target,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Emits every token as a custom property declaration on `:root`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nice_typography::{TokenCategory, TokenRegistry};
    ///
    /// let css = TokenRegistry::new()
    ///     .add(TokenCategory::FontSize, "h1", "2rem")
    ///     .root_stylesheet();
    ///
    /// assert_eq!(css, ":root {\n  --typography-size-h1: 2rem;\n}\n");
    /// ```
    pub fn root_stylesheet(&self) -> String {
        let block: DeclarationBlock = self
            .values
            .iter()
            .map(|(name, value)| Declaration::new(name.clone(), value.clone()))
            .collect();
        block.to_rule(":root")
    }

    /// Parses a YAML token file.
    pub fn from_yaml_str(source: &str) -> Result<Self, TokenError> {
        let file: TokenFile = serde_yaml::from_str(source)?;
        Ok(Self::from_token_file(file))
    }

    /// Parses a JSON token file.
    pub fn from_json_str(source: &str) -> Result<Self, TokenError> {
        let file: TokenFile = serde_json::from_str(source)?;
        Ok(Self::from_token_file(file))
    }

    /// Reads a token file, choosing the format by extension.
    ///
    /// Aliases are not validated here, since they may point at tokens
    /// defined by a registry this one is later merged into.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TokenError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, TokenError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(TokenError::UnsupportedExtension {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| TokenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = parse(&source)?;
        tracing::debug!(path = %path.display(), tokens = registry.len(), "loaded token file");
        Ok(registry)
    }

    fn from_token_file(file: TokenFile) -> Self {
        let mut registry = Self::new();
        for (category, variants) in file.0 {
            for (variant, value) in variants {
                registry.insert(category, &variant, value.into_css());
            }
        }
        registry
    }
}

impl TokenLookup for TokenRegistry {
    fn lookup(&self, key: &TokenKey) -> Token {
        let name = key.property_name();
        let fallback = self.resolve_literal(&name).map(str::to_string);
        Token { name, fallback }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_registry_add_and_get() {
        let tokens = TokenRegistry::new().add(TokenCategory::FontWeight, "heading", "700");
        assert!(tokens.has("--typography-weight-heading"));
        assert_eq!(tokens.get("--typography-weight-heading"), Some("700"));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_registry_default_is_empty() {
        let tokens = TokenRegistry::default();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_resolve_literal_follows_chain() {
        let mut tokens = TokenRegistry::new();
        tokens.insert_property("--brand-ink", "#101820");
        tokens.insert(TokenCategory::ContentColor, "default", "var(--brand-ink)");
        tokens.insert(
            TokenCategory::ContentColor,
            "dark",
            "var(--content-color-default, black)",
        );

        assert_eq!(
            tokens.resolve_literal("--content-color-dark"),
            Some("#101820")
        );
    }

    #[test]
    fn test_resolve_literal_dangling_and_cycle() {
        let mut tokens = TokenRegistry::new();
        tokens.insert_property("--orphan", "var(--missing)");
        tokens.insert_property("--a", "var(--b)");
        tokens.insert_property("--b", "var(--a)");

        assert_eq!(tokens.resolve_literal("--orphan"), None);
        assert_eq!(tokens.resolve_literal("--a"), None);
        assert_eq!(tokens.resolve_literal("--unknown"), None);
    }

    #[test]
    fn test_validate_valid() {
        let tokens = TokenRegistry::new()
            .add(TokenCategory::FontFamily, "base", "serif")
            .add(TokenCategory::FontFamily, "heading", "var(--font-family-base)");
        assert!(tokens.validate().is_ok());
    }

    #[test]
    fn test_validate_unresolved_alias() {
        let tokens =
            TokenRegistry::new().add(TokenCategory::FontFamily, "heading", "var(--font-display)");
        assert_eq!(
            tokens.validate(),
            Err(ValidationError::UnresolvedAlias {
                from: "--font-family-heading".to_string(),
                to: "--font-display".to_string(),
            })
        );
    }

    #[test]
    fn test_alias_with_fallback_to_unregistered_token() {
        let mut tokens = TokenRegistry::new();
        tokens.insert(TokenCategory::StatusColor, "error", "var(--host-brand, #c00)");
        tokens.insert_property("--shadow", "var(--host-shadow,)");

        assert!(tokens.validate().is_ok());
        assert_eq!(tokens.resolve_literal("--status-color-error"), Some("#c00"));
        assert_eq!(tokens.resolve_literal("--shadow"), Some(""));

        tokens.insert_property("--host-brand", "rebeccapurple");
        assert_eq!(
            tokens.resolve_literal("--status-color-error"),
            Some("rebeccapurple")
        );
    }

    #[test]
    fn test_alias_fallback_does_not_hide_cycles() {
        let mut tokens = TokenRegistry::new();
        tokens.insert_property("--a", "var(--b, 1rem)");
        tokens.insert_property("--b", "var(--a, 2rem)");

        assert!(matches!(
            tokens.validate(),
            Err(ValidationError::CycleDetected { .. })
        ));
        assert_eq!(tokens.resolve_literal("--a"), None);
    }

    #[test]
    fn test_validate_cycle() {
        let mut tokens = TokenRegistry::new();
        tokens.insert_property("--a", "var(--b)");
        tokens.insert_property("--b", "var(--c)");
        tokens.insert_property("--c", "var(--a)");

        match tokens.validate() {
            Err(ValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["--a", "--b", "--c", "--a"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_later_wins() {
        let mut tokens = TokenRegistry::with_defaults();
        tokens.merge(
            TokenRegistry::new()
                .add(TokenCategory::FontSize, "h1", "3rem")
                .add(TokenCategory::StatusColor, "error", "crimson"),
        );

        assert_eq!(tokens.get("--typography-size-h1"), Some("3rem"));
        assert_eq!(tokens.get("--typography-size-h2"), Some("1.5rem"));
        assert_eq!(tokens.get("--status-color-error"), Some("crimson"));
    }

    #[test]
    fn test_lookup_uses_resolved_fallback() {
        let tokens = TokenRegistry::with_defaults();
        let token = tokens.lookup(&TokenKey::new(TokenCategory::FontWeight, "heading"));
        assert_eq!(token.name, "--typography-weight-heading");
        assert_eq!(token.fallback.as_deref(), Some("600"));

        let color = tokens.lookup(&TokenKey::new(TokenCategory::StatusColor, "success"));
        assert_eq!(color.name, "--status-color-success");
        assert_eq!(color.fallback, None);
    }

    #[test]
    fn test_from_yaml_str() {
        let tokens = TokenRegistry::from_yaml_str(
            "font-size:\n  h1: 2.5rem\nfont-weight:\n  heading: 700\nline-height:\n  condensed: 1.1\n",
        )
        .unwrap();

        assert_eq!(tokens.get("--typography-size-h1"), Some("2.5rem"));
        assert_eq!(tokens.get("--typography-weight-heading"), Some("700"));
        assert_eq!(tokens.get("--line-height-condensed"), Some("1.1"));
    }

    #[test]
    fn test_from_yaml_numbers_are_canonicalized() {
        let tokens = TokenRegistry::from_yaml_str(
            "line-height:\n  condensed: 1.10\n  default: \"1.50\"\nfont-weight:\n  heading: 600\n",
        )
        .unwrap();

        assert_eq!(tokens.get("--line-height-condensed"), Some("1.1"));
        assert_eq!(tokens.get("--line-height-default"), Some("1.50"));
        assert_eq!(tokens.get("--typography-weight-heading"), Some("600"));
    }

    #[test]
    fn test_from_json_str() {
        let tokens =
            TokenRegistry::from_json_str(r##"{"status-color": {"success": "#2e7d32"}}"##).unwrap();
        assert_eq!(tokens.get("--status-color-success"), Some("#2e7d32"));
    }

    #[test]
    fn test_from_yaml_unknown_category_errors() {
        let result = TokenRegistry::from_yaml_str("border-color:\n  base: red\n");
        assert!(matches!(result, Err(TokenError::Yaml(_))));
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "max-width:\n  prose: 60ch").unwrap();

        let tokens = TokenRegistry::from_file(&path).unwrap();
        assert_eq!(tokens.get("--typography--max-width--prose"), Some("60ch"));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let result = TokenRegistry::from_file("tokens.toml");
        assert!(matches!(
            result,
            Err(TokenError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = TokenRegistry::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(TokenError::Io { .. })));
    }

    #[test]
    fn test_root_stylesheet_sorted() {
        let css = TokenRegistry::new()
            .add(TokenCategory::LineHeight, "default", "1.5")
            .add(TokenCategory::FontSize, "h1", "2rem")
            .root_stylesheet();

        assert_eq!(
            css,
            ":root {\n  --line-height-default: 1.5;\n  --typography-size-h1: 2rem;\n}\n"
        );
    }
}
