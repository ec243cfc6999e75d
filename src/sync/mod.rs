//! Publishing to the remote surface: subtree rendering, stylesheet
//! regeneration, patches, and the surface and sink seams.

pub mod document;
pub mod patch;
pub mod protocol;
pub mod render;
pub mod sink;
pub mod surface;

pub use document::{html_document, BRIDGE_SCRIPT};
pub use patch::{Patch, STYLESHEET_LINK_ID};
pub use protocol::{PublishReport, SyncProtocol};
pub use render::render_subtree;
pub use sink::{FileSink, MemorySink, StylesheetSink};
pub use surface::{NullSurface, ScriptSurface, Surface, SurfaceError};
