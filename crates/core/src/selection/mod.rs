mod state;
mod view;

pub use state::{Fetch, Selection, SelectionChange, DEFAULT_COUNTRY};
pub use view::ViewState;
