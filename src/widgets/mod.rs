//! Built-in widgets: Text, Container, Column/Row, Button, Icon, SizedBox,
//! AppBar, Scaffold, Drawer, BottomSheet, SnackBar, Dialog, ListTile.

pub mod app_bar;
pub mod bottom_sheet;
pub mod button;
pub mod container;
pub mod dialog;
pub mod drawer;
pub mod flex;
pub mod icon;
pub mod list_tile;
pub mod scaffold;
pub mod sized_box;
pub mod snack_bar;
pub mod text;

pub use app_bar::AppBar;
pub use bottom_sheet::BottomSheet;
pub use button::{Button, ButtonVariant};
pub use container::Container;
pub use dialog::Dialog;
pub use drawer::{Drawer, DrawerSide};
pub use flex::{Axis, Flex};
pub use icon::Icon;
pub use list_tile::ListTile;
pub use scaffold::Scaffold;
pub use sized_box::SizedBox;
pub use snack_bar::SnackBar;
pub use text::Text;
