pub mod bars;
pub mod core;
pub mod display;
pub mod settings;
pub mod types;
pub mod view;

pub use self::core::App;
pub use bars::{NavBar, SearchBar};
pub use display::{DisplayContext, DisplayManager};
pub use types::{Focus, View};
pub use view::{Block, CardRow, Container, Source, ViewManager};
