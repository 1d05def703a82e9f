//! Form model mirrored from the page

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FormError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    Post,
    Put,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Post => "POST",
            FormMethod::Put => "PUT",
        }
    }
}

impl std::fmt::Display for FormMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FormMethod {
    type Err = FormError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "post" => Ok(FormMethod::Post),
            "put" => Ok(FormMethod::Put),
            _ => Err(FormError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<FormMethod> for reqwest::Method {
    fn from(method: FormMethod) -> Self {
        match method {
            FormMethod::Post => reqwest::Method::POST,
            FormMethod::Put => reqwest::Method::PUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// File input; `None` when nothing was chosen
    File(Option<FileUpload>),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::File(upload) => upload.is_none(),
        }
    }
}

/// The subset of native input constraints the portal's forms use
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Range { min: Option<f64>, max: Option<f64> },
    Email,
    Date,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
    pub constraints: Vec<Constraint>,
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Text(value.into()),
            constraints: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>, upload: Option<FileUpload>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::File(upload),
            constraints: Vec::new(),
        }
    }

    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn required(self) -> Self {
        self.with(Constraint::Required)
    }
}

#[derive(Debug, Clone)]
pub struct FormModel {
    pub id: String,
    /// Declared submit target
    pub action: Url,
    pub method: FormMethod,
    pub fields: Vec<FormField>,
    pub(crate) was_validated: bool,
}

impl FormModel {
    pub fn new(id: impl Into<String>, action: Url, method: FormMethod) -> Self {
        Self {
            id: id.into(),
            action,
            method,
            fields: Vec::new(),
            was_validated: false,
        }
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn set_value(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::FieldNotFound(name.to_string()))?;
        field.value = value;
        Ok(())
    }

    /// Whether a failed check has switched on invalid-state styling
    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    pub fn css_class(&self) -> &'static str {
        if self.was_validated {
            "needs-validation was-validated"
        } else {
            "needs-validation"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!("post".parse::<FormMethod>().unwrap(), FormMethod::Post);
        assert_eq!("PUT".parse::<FormMethod>().unwrap(), FormMethod::Put);
        assert!(matches!(
            "get".parse::<FormMethod>(),
            Err(FormError::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn test_set_value() {
        let action = Url::parse("http://localhost/employee/add").unwrap();
        let mut form = FormModel::new("employeeForm", action, FormMethod::Post)
            .with_field(FormField::text("full_name", ""));

        form.set_value("full_name", FieldValue::Text("Ngô Thị Lan".to_string()))
            .unwrap();
        assert_eq!(
            form.field("full_name").unwrap().value,
            FieldValue::Text("Ngô Thị Lan".to_string())
        );
        assert!(matches!(
            form.set_value("missing", FieldValue::Text(String::new())),
            Err(FormError::FieldNotFound(_))
        ));
    }
}
