//! Widget identity, the mounted node registry, and the mount walk.

pub mod id;
pub mod node;
pub mod registry;
pub mod scan;
pub mod tree;

pub use id::{IdAllocator, WidgetId};
pub use node::{Node, Slot};
pub use registry::{NodeRegistry, RegistryError};
pub use tree::WidgetTree;
