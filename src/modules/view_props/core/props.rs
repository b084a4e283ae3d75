use serde::{Deserialize, Serialize};

/// How a project's issue list is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueViewKind {
    #[default]
    List,
    Kanban,
    Calendar,
    Spreadsheet,
    GanttChart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    State,
    Priority,
    Labels,
    CreatedBy,
}

/// Per-member issue filters; `None` means the dimension is not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFilters {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<Vec<String>>,
    pub assignees: Option<Vec<String>>,
    pub labels: Option<Vec<String>>,
    pub state: Option<Vec<String>>,
    pub state_group: Option<Vec<String>>,
    pub subscriber: Option<Vec<String>>,
    pub created_by: Option<Vec<String>>,
    pub target_date: Option<Vec<String>>,
}

/// A member's display preferences for one project's issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewProps {
    pub issue_view: IssueViewKind,
    pub group_by: Option<GroupBy>,
    pub order_by: String,
    pub show_empty_groups: bool,
    pub show_sub_issues: bool,
    pub calendar_date_range: String,
    pub filters: IssueFilters,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            issue_view: IssueViewKind::List,
            group_by: None,
            order_by: "-created_at".to_string(),
            show_empty_groups: true,
            show_sub_issues: true,
            calendar_date_range: String::new(),
            filters: IssueFilters::default(),
        }
    }
}
