//! CSS output model: Declaration, DeclarationBlock, RuleSet.
//!
//! The framework only ever *emits* CSS. Style value objects push their
//! declarations into a [`DeclarationBlock`], and a [`RuleSet`] pairs a block
//! with a class selector for the generated stylesheet.

use std::fmt;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// An ordered list of declarations.
///
/// Pushing a property that is already present replaces its value in place,
/// so later writers win without reordering the block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`.
    pub fn push(&mut self, property: &'static str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.declarations.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
    }

    /// Set `property` only when `value` is present.
    pub fn push_opt<T: fmt::Display>(&mut self, property: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(property, value);
        }
    }

    /// Set `property` (builder).
    pub fn with(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.push(property, value);
        self
    }

    /// Append every declaration of `other`, overriding duplicates.
    pub fn extend(&mut self, other: DeclarationBlock) {
        for decl in other.declarations {
            self.push(decl.property, decl.value);
        }
    }

    /// Look up the value of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as an inline `style` attribute body.
    pub fn to_inline(&self) -> String {
        self.declarations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A class selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub selector: String,
    pub block: DeclarationBlock,
}

impl RuleSet {
    pub fn new(selector: impl Into<String>, block: DeclarationBlock) -> Self {
        Self {
            selector: selector.into(),
            block,
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.block.is_empty() {
            write!(f, "{} {{ }}", self.selector)
        } else {
            write!(f, "{} {{ {} }}", self.selector, self.block.to_inline())
        }
    }
}

/// Format a pixel length.
pub fn px(value: i32) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_keeps_order() {
        let mut block = DeclarationBlock::new();
        block.push("color", "red");
        block.push("padding", px(4));
        assert_eq!(block.to_inline(), "color: red; padding: 4px;");
    }

    #[test]
    fn push_replaces_existing() {
        let block = DeclarationBlock::new()
            .with("color", "red")
            .with("margin", 0)
            .with("color", "blue");
        assert_eq!(block.len(), 2);
        assert_eq!(block.get("color"), Some("blue"));
        assert_eq!(block.to_inline(), "color: blue; margin: 0;");
    }

    #[test]
    fn push_opt_skips_none() {
        let mut block = DeclarationBlock::new();
        block.push_opt("width", None::<String>);
        block.push_opt("height", Some(px(10)));
        assert_eq!(block.to_inline(), "height: 10px;");
    }

    #[test]
    fn extend_overrides() {
        let mut base = DeclarationBlock::new().with("color", "red").with("margin", 0);
        base.extend(DeclarationBlock::new().with("color", "green"));
        assert_eq!(base.to_inline(), "color: green; margin: 0;");
    }

    #[test]
    fn rule_set_display() {
        let rule = RuleSet::new(".shared-text-0", DeclarationBlock::new().with("color", "red"));
        assert_eq!(rule.to_string(), ".shared-text-0 { color: red; }");
        let empty = RuleSet::new(".x", DeclarationBlock::new());
        assert_eq!(empty.to_string(), ".x { }");
    }
}
