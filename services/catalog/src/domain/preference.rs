use serde_json::Value;

use crate::error::CatalogServiceError;

/// Extract preferred genre names from a stored `favourite_genres` document.
///
/// `None` means the user has no profile, which reads as no preferences. An
/// array yields the string `genre_name` of each object element, in order;
/// other elements are skipped. Any non-array document is a shape error.
pub fn favourite_genre_names(doc: Option<&Value>) -> Result<Vec<String>, CatalogServiceError> {
    let Some(doc) = doc else {
        return Ok(Vec::new());
    };
    let Value::Array(items) = doc else {
        return Err(CatalogServiceError::DataShape(format!(
            "favourite_genres must be an array, found {}",
            json_type_name(doc)
        )));
    };
    Ok(items
        .iter()
        .filter_map(|item| item.get("genre_name")?.as_str())
        .map(str::to_owned)
        .collect())
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
