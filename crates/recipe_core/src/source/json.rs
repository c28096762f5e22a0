use super::{RecipeSource, SourceError, SourceResult};
use crate::model::recipe::Recipe;
use log::warn;
use std::path::Path;

/// Source decoding a JSON array of provider-shaped recipe records.
///
/// Decoding runs record validation; malformed or invalid records surface as
/// [`SourceError::InvalidData`].
#[derive(Debug, Clone, Default)]
pub struct JsonRecipeSource {
    payload: String,
}

impl JsonRecipeSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Reads the whole payload from `path`.
    ///
    /// # Errors
    /// - [`SourceError::Unavailable`] when the file cannot be read.
    pub fn read_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path).map_err(|err| {
            SourceError::Unavailable(format!("failed to read `{}`: {err}", path.display()))
        })?;
        Ok(Self::new(payload))
    }
}

impl RecipeSource for JsonRecipeSource {
    fn load_recipes(&self) -> SourceResult<Vec<Recipe>> {
        serde_json::from_str::<Vec<Recipe>>(&self.payload).map_err(|err| {
            warn!(
                "event=source_decode module=source status=error line={} column={}",
                err.line(),
                err.column()
            );
            SourceError::InvalidData(err.to_string())
        })
    }
}
