//! What the results area shows

use hrms_view::{escape_html, Render};

use crate::employee::EmployeeSummary;

pub const NO_RESULTS_MESSAGE: &str = "Không tìm thấy kết quả";
pub const SEARCH_FAILED_MESSAGE: &str = "Có lỗi xảy ra khi tìm kiếm";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchView {
    /// Nothing to show; query too short or untouched
    #[default]
    Idle,
    /// Request scheduled or in flight
    Loading,
    /// Request succeeded with no matches
    Empty,
    /// Matches in the order the server returned them
    Results(Vec<EmployeeSummary>),
    /// Transport or server failure
    Failed,
}

impl SearchView {
    pub fn entries(&self) -> &[EmployeeSummary] {
        match self {
            SearchView::Results(entries) => entries,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchView::Loading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchView::Idle => "idle",
            SearchView::Loading => "loading",
            SearchView::Empty => "empty",
            SearchView::Results(_) => "results",
            SearchView::Failed => "failed",
        }
    }
}

impl Render for SearchView {
    fn render_html(&self) -> String {
        match self {
            SearchView::Idle => String::new(),
            SearchView::Loading => {
                r#"<div class="text-center"><div class="spinner-border text-primary" role="status"></div></div>"#
                    .to_string()
            }
            SearchView::Empty => {
                format!(r#"<p class="text-muted text-center">{NO_RESULTS_MESSAGE}</p>"#)
            }
            SearchView::Failed => {
                format!(r#"<p class="text-danger text-center">{SEARCH_FAILED_MESSAGE}</p>"#)
            }
            SearchView::Results(entries) => {
                let mut out = String::from(r#"<div class="list-group">"#);
                for employee in entries {
                    render_entry(employee, &mut out);
                }
                out.push_str("</div>");
                out
            }
        }
    }
}

fn render_entry(employee: &EmployeeSummary, out: &mut String) {
    out.push_str(r#"<a href=""#);
    out.push_str(&escape_html(&employee.detail_path()));
    out.push_str(r#"" class="list-group-item list-group-item-action">"#);
    out.push_str(r#"<div class="d-flex w-100 justify-content-between">"#);
    out.push_str(r#"<h6 class="mb-1">"#);
    out.push_str(&escape_html(&employee.name));
    out.push_str(r#"</h6><small class="text-muted">"#);
    out.push_str(&escape_html(&employee.code));
    out.push_str("</small></div>");
    out.push_str(r#"<p class="mb-1">"#);
    out.push_str(&escape_html(employee.position_label()));
    out.push_str(r#"</p><small class="text-muted">"#);
    out.push_str(&escape_html(employee.department_label()));
    out.push_str("</small></a>");
}
