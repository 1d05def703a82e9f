//! Repeating field groups (dependants, work history, etc.)

use uuid::Uuid;

use hrms_view::Render;

use crate::error::FormError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub id: String,
    /// Template markup, inserted as given
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct RepeatingFields {
    groups: Vec<FieldGroup>,
}

impl RepeatingFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group built from `template`; returns its id
    pub fn add(&mut self, template: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        self.groups.push(FieldGroup {
            id: id.clone(),
            html: template.into(),
        });
        tracing::debug!(group_id = %id, count = self.groups.len(), "Added field group");
        id
    }

    pub fn remove(&mut self, id: &str) -> Result<FieldGroup> {
        let index = self
            .groups
            .iter()
            .position(|group| group.id == id)
            .ok_or_else(|| FormError::FieldGroupNotFound(id.to_string()))?;
        Ok(self.groups.remove(index))
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Render for RepeatingFields {
    fn render_html(&self) -> String {
        self.groups
            .iter()
            .map(|group| {
                format!(
                    r#"<div class="form-group" data-group-id="{}">{}</div>"#,
                    group.id, group.html
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<input name="dependant_name[]" class="form-control">"#;

    #[test]
    fn test_add_and_remove() {
        let mut fields = RepeatingFields::new();
        let first = fields.add(TEMPLATE);
        let second = fields.add(TEMPLATE);
        assert_ne!(first, second);
        assert_eq!(fields.len(), 2);

        let removed = fields.remove(&first).unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(fields.groups()[0].id, second);
    }

    #[test]
    fn test_remove_unknown() {
        let mut fields = RepeatingFields::new();
        assert!(matches!(
            fields.remove("missing"),
            Err(FormError::FieldGroupNotFound(_))
        ));
    }

    #[test]
    fn test_render_wraps_each_group() {
        let mut fields = RepeatingFields::new();
        fields.add(TEMPLATE);
        fields.add(TEMPLATE);

        let html = fields.render_html();
        assert_eq!(html.matches(r#"<div class="form-group""#).count(), 2);
        assert!(html.contains(TEMPLATE));
    }
}
