//! UIコンポーネント

pub mod header;
pub mod upload_area;
pub mod loading_indicator;
pub mod results_panel;
pub mod recipe_card;
