use std::fmt;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// An ordered list of declarations.
///
/// A property may appear more than once; as in CSS, the last valid one
/// applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration::new(property, value));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Every value declared for `property`, in order.
    pub fn values(&self, property: &str) -> Vec<&str> {
        self.declarations
            .iter()
            .filter(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
            .collect()
    }

    /// The last value declared for `property`.
    pub fn last(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.declarations.iter().any(|decl| decl.property == property)
    }

    /// Formats the block for a `style` attribute: `a: b; c: d;`.
    pub fn to_inline(&self) -> String {
        self.declarations
            .iter()
            .map(Declaration::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats the block as a rule, one declaration per line.
    pub fn to_rule(&self, selector: &str) -> String {
        let mut css = format!("{} {{\n", selector);
        for decl in &self.declarations {
            css.push_str("  ");
            css.push_str(&decl.to_string());
            css.push('\n');
        }
        css.push_str("}\n");
        css
    }
}

impl FromIterator<Declaration> for DeclarationBlock {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DeclarationBlock {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
