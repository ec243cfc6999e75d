//! Surface: the remote rendering target patches are applied to.

use tracing::trace;

use crate::dom::WidgetId;

use super::patch::Patch;

/// A patch could not be applied. Never fatal to a publish.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("element {0} not found on the surface")]
    ElementNotFound(WidgetId),
    #[error("surface host error: {0}")]
    Host(String),
}

/// Something that can apply patches: a webview, an in-memory document, or
/// nothing at all.
pub trait Surface {
    fn apply(&mut self, patch: &Patch) -> Result<(), SurfaceError>;
}

/// Discards every patch.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn apply(&mut self, patch: &Patch) -> Result<(), SurfaceError> {
        trace!(%patch, "null surface dropped patch");
        Ok(())
    }
}

/// Applies patches by evaluating their script form through a host callback.
///
/// The callback runs the script and returns its result as text, or an error
/// message. A `"false"` result for an element replacement means the element
/// was not found.
pub struct ScriptSurface<F> {
    execute: F,
}

impl<F> ScriptSurface<F>
where
    F: FnMut(&str) -> Result<String, String>,
{
    pub fn new(execute: F) -> Self {
        Self { execute }
    }
}

impl<F> Surface for ScriptSurface<F>
where
    F: FnMut(&str) -> Result<String, String>,
{
    fn apply(&mut self, patch: &Patch) -> Result<(), SurfaceError> {
        let result = (self.execute)(&patch.to_script()).map_err(SurfaceError::Host)?;
        match patch {
            Patch::ReplaceElement { target, .. } if result.trim() == "false" => {
                Err(SurfaceError::ElementNotFound(*target))
            }
            _ => Ok(()),
        }
    }
}

impl<F> std::fmt::Debug for ScriptSurface<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptSurface").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(n: u64) -> Patch {
        Patch::ReplaceElement {
            target: WidgetId::from_raw(n),
            markup: "<p></p>".into(),
        }
    }

    #[test]
    fn script_surface_forwards_scripts() {
        let mut seen = Vec::new();
        let mut surface = ScriptSurface::new(|script: &str| {
            seen.push(script.to_owned());
            Ok("true".to_owned())
        });
        surface.apply(&replace(1)).unwrap();
        drop(surface);
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("outerHTML"));
    }

    #[test]
    fn false_result_is_not_found() {
        let mut surface = ScriptSurface::new(|_: &str| Ok("false".to_owned()));
        assert_eq!(
            surface.apply(&replace(4)),
            Err(SurfaceError::ElementNotFound(WidgetId::from_raw(4)))
        );
        let repoint = Patch::RepointStylesheet { href: "a".into() };
        assert_eq!(surface.apply(&repoint), Ok(()));
    }

    #[test]
    fn host_errors_pass_through() {
        let mut surface = ScriptSurface::new(|_: &str| Err("window closed".to_owned()));
        assert_eq!(
            surface.apply(&replace(1)),
            Err(SurfaceError::Host("window closed".into()))
        );
    }

    #[test]
    fn null_surface_accepts_everything() {
        assert!(NullSurface.apply(&replace(1)).is_ok());
    }
}
