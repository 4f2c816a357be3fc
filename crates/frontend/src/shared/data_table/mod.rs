//! Generic searchable, filterable and paginated table.
//!
//! The pure parts (`record`, `state`, `model`) know nothing about the DOM and
//! are tested natively. `ui` wires them into a Leptos component.

pub mod column;
pub mod filter;
pub mod model;
pub mod record;
pub mod state;
pub mod ui;

pub use column::{Cell, Column};
pub use filter::{FilterOption, TableFilter};
pub use model::{PageWindow, TableView, DEFAULT_ITEMS_PER_PAGE};
pub use record::TableRecord;
pub use state::ViewState;
pub use ui::DataTable;
