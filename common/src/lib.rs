//! Recipe Lens Common Library
//!
//! CLIとWeb(WASM)で共有される型・検証・状態機械

pub mod types;
pub mod error;
pub mod upload;
pub mod response;
pub mod render;
pub mod controller;

pub use types::{AnalysisResponse, ErrorBody, Recipe};
pub use error::SubmitError;
pub use upload::{validate_upload, UploadTarget, DEFAULT_ANALYZE_PATH, IMAGE_MIME_PREFIX, UPLOAD_FIELD_NAME};
pub use response::interpret_response;
pub use render::{
    render_recipe_card, sanitize_text, sanitize_url, ListEntry, RecipeArea, RecipeCard,
    ResultsView, UrlUse, NO_ITEMS_TEXT, NO_RECIPES_TEXT, VIEW_RECIPE_LABEL,
};
pub use controller::{Completion, Phase, Ticket, UploadController};
