//! Checkbox row selection for data tables

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::Result;

pub const ACTIVE_ROW_CLASS: &str = "table-active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    rows: Vec<Row>,
}

impl RowSelection {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = ids
            .into_iter()
            .map(|id| Row {
                id: id.into(),
                checked: false,
            })
            .collect();
        Self { rows }
    }

    /// Reflect one checkbox change onto its row
    pub fn toggle_row(&mut self, id: &str, checked: bool) -> Result<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| FormError::RowNotFound(id.to_string()))?;
        row.checked = checked;
        Ok(())
    }

    /// Master checkbox: every row follows its state
    pub fn select_all(&mut self, checked: bool) {
        for row in &mut self.rows {
            row.checked = checked;
        }
    }

    pub fn row_class(&self, id: &str) -> Option<&'static str> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| if row.checked { ACTIVE_ROW_CLASS } else { "" })
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.checked)
            .map(|row| row.id.as_str())
            .collect()
    }

    pub fn is_all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row.checked)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}
