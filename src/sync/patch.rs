//! Patch: a single mutation of the remote surface, and its script form.

use std::fmt;

use crate::dom::WidgetId;
use crate::widget::js_string;

/// Id of the `<link>` element that loads the generated stylesheet.
pub const STYLESHEET_LINK_ID: &str = "weft-stylesheet";

/// One remote mutation emitted by a publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Point the stylesheet link at a new, version-tagged href.
    RepointStylesheet { href: String },
    /// Replace the element `target` (outer markup included) with `markup`.
    ReplaceElement { target: WidgetId, markup: String },
}

impl Patch {
    /// A script that applies this patch in a DOM and evaluates to `true` when
    /// the addressed element existed, `false` otherwise.
    pub fn to_script(&self) -> String {
        match self {
            Patch::RepointStylesheet { href } => format!(
                "(function(){{var l=document.getElementById({});if(!l){{return false;}}l.href={};return true;}})()",
                js_string(STYLESHEET_LINK_ID),
                js_string(href)
            ),
            Patch::ReplaceElement { target, markup } => format!(
                "(function(){{var e=document.getElementById({});if(!e){{console.log({});return false;}}e.outerHTML={};return true;}})()",
                js_string(&target.to_string()),
                js_string(&format!("Element with ID {target} not found.")),
                js_string(markup)
            ),
        }
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::RepointStylesheet { href } => write!(f, "repoint stylesheet to {href}"),
            Patch::ReplaceElement { target, markup } => {
                write!(f, "replace {target} ({} bytes)", markup.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn repoint_script() {
        let patch = Patch::RepointStylesheet {
            href: "styles.css?v=2".into(),
        };
        assert_eq!(
            patch.to_script(),
            "(function(){var l=document.getElementById(\"weft-stylesheet\");\
             if(!l){return false;}l.href=\"styles.css?v=2\";return true;})()"
        );
    }

    #[test]
    fn replace_script_quotes_markup() {
        let patch = Patch::ReplaceElement {
            target: WidgetId::from_raw(7),
            markup: "<p id='id_9'>say \"hi\" `now` ${x}\n</p>".into(),
        };
        let script = patch.to_script();
        assert!(script.contains("document.getElementById(\"id_7\")"));
        assert!(script.contains("e.outerHTML=\"<p id='id_9'>say \\\"hi\\\" `now` ${x}\\n</p>\""));
        assert!(script.contains("Element with ID id_7 not found."));
    }

    #[test]
    fn display() {
        let patch = Patch::ReplaceElement {
            target: WidgetId::from_raw(3),
            markup: "abc".into(),
        };
        assert_eq!(patch.to_string(), "replace id_3 (3 bytes)");
    }
}
