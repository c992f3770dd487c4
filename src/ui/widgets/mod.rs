pub mod card_grid;
pub mod footer;
pub mod nav_bar;
pub mod search_bar;
