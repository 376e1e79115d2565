use apiscope_api::{ApiError, ApiResult, Presenter};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Presenter that copies a declared list of fields out of a JSON object.
///
/// Missing fields are emitted as `null` so every payload has the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPresenter {
    name: String,
    fields: Vec<String>,
}

impl FieldPresenter {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl Presenter for FieldPresenter {
    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<String> {
        self.fields.clone()
    }

    fn present(&self, resource: &Value) -> ApiResult<Map<String, Value>> {
        let Value::Object(object) = resource else {
            return Err(ApiError::InvalidArgument(format!(
                "{} expects an object resource",
                self.name
            )));
        };
        Ok(self
            .fields
            .iter()
            .map(|field| {
                let value = object.get(field).cloned().unwrap_or(Value::Null);
                (field.clone(), value)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_present_picks_fields_in_declared_order() {
        let presenter = FieldPresenter::new("PostPresenter", ["title", "id", "missing"]);
        let out = presenter
            .present(&json!({"id": 7, "title": "Hello", "secret": "x"}))
            .unwrap();
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"title":"Hello","id":7,"missing":null}"#
        );
    }

    #[test]
    fn test_non_object_rejected() {
        let presenter = FieldPresenter::new("PostPresenter", ["id"]);
        assert!(matches!(
            presenter.present(&json!([1, 2])),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
