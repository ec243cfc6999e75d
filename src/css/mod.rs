//! Styling: value objects, declaration blocks, shared-class interning.

pub mod model;
pub mod registry;
pub mod table;
pub mod values;

pub use model::{px, Declaration, DeclarationBlock, RuleSet};
pub use registry::StyleRegistry;
pub use table::{ClassName, StyleKey, StyleTable};
pub use values::{
    Alignment, BorderRadius, BorderSide, BorderStyle, BoxConstraints, BoxDecoration, BoxShadow,
    ButtonStyle, Color, CrossAxisAlignment, EdgeInsets, FlexAlign, FontStyle, FontWeight,
    MainAxisAlignment, MainAxisSize, TextAlign, TextDecoration, TextStyle,
};
