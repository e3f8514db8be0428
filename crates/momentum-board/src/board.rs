/*
[INPUT]:  Statuses and tasks from BoardApi, configured task source
[OUTPUT]: TaskBoard view model (one colored column per status, cards per column)
[POS]:    Presentation layer - kanban board model
[UPDATE]: When changing column coloring, card fields, or task grouping
*/

use chrono::NaiveDate;
use momentum_adapter::{Status, Task};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::BoardApi;

/// Shown instead of columns when the status list is empty
pub const EMPTY_BOARD_MESSAGE: &str = "No statuses found";

/// Where board cards come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    /// `GET /tasks`, grouped into columns by status id
    #[default]
    Remote,
    /// Fixed demo cards repeated in every column
    Mock,
}

/// Column accent, keyed by status id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnColor {
    Yellow,
    Orange,
    Pink,
    Blue,
    Gray,
}

impl ColumnColor {
    pub fn for_status(status_id: u64) -> Self {
        match status_id {
            1 => ColumnColor::Yellow,
            2 => ColumnColor::Orange,
            3 => ColumnColor::Pink,
            4 => ColumnColor::Blue,
            _ => ColumnColor::Gray,
        }
    }
}

/// Card rendered inside a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCardView {
    /// Remote task id; `None` for mock cards
    pub task_id: Option<u64>,
    pub tags: Vec<String>,
    pub date: String,
    pub title: String,
    pub description: String,
    pub assignee: Option<String>,
    pub comments: u32,
}

impl TaskCardView {
    pub fn from_task(task: &Task) -> Self {
        let mut tags = Vec::new();
        if let Some(department) = task.department.as_ref() {
            tags.push(department.name.clone());
        }
        if let Some(priority) = task.priority.as_ref() {
            tags.push(priority.name.clone());
        }

        Self {
            task_id: Some(task.id),
            tags,
            date: task.due_on().map(format_card_date).unwrap_or_default(),
            title: task.name.clone(),
            description: task.description.clone().unwrap_or_default(),
            assignee: task.employee.as_ref().map(|employee| employee.full_name()),
            comments: task.total_comments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskColumn {
    pub status_id: u64,
    pub title: String,
    pub color: ColumnColor,
    pub cards: Vec<TaskCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    source: TaskSource,
    columns: Vec<TaskColumn>,
}

impl TaskBoard {
    /// Build columns in status order
    ///
    /// Remote tasks are placed in the column matching their status id; tasks
    /// whose status is unknown are not shown. In mock mode every column gets
    /// the full mock list and `tasks` is ignored.
    pub fn build(statuses: &[Status], tasks: &[Task], source: TaskSource) -> Self {
        let columns = statuses
            .iter()
            .map(|status| {
                let cards = match source {
                    TaskSource::Mock => mock_cards(),
                    TaskSource::Remote => tasks
                        .iter()
                        .filter(|task| task.effective_status_id() == Some(status.id))
                        .map(TaskCardView::from_task)
                        .collect(),
                };
                TaskColumn {
                    status_id: status.id,
                    title: status.name.clone(),
                    color: ColumnColor::for_status(status.id),
                    cards,
                }
            })
            .collect();

        Self { source, columns }
    }

    /// Fetch statuses (and tasks, in remote mode) and build the board
    pub async fn load(api: &dyn BoardApi, source: TaskSource) -> Self {
        let (statuses, tasks) = match source {
            TaskSource::Remote => tokio::join!(api.statuses(), api.tasks()),
            TaskSource::Mock => (api.statuses().await, Vec::new()),
        };
        debug!(
            statuses = statuses.len(),
            tasks = tasks.len(),
            ?source,
            "board data fetched"
        );

        let board = Self::build(&statuses, &tasks, source);
        info!(
            columns = board.columns.len(),
            cards = board.card_count(),
            "board loaded"
        );
        board
    }

    pub fn source(&self) -> TaskSource {
        self.source
    }

    pub fn columns(&self) -> &[TaskColumn] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&TaskColumn> {
        self.columns.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }
}

/// Card date as shown on the board, e.g. `22 Aug, 2022`
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%-d %b, %Y").to_string()
}

/// Demo cards shown in every column in [`TaskSource::Mock`] mode
pub fn mock_cards() -> Vec<TaskCardView> {
    vec![
        TaskCardView {
            task_id: None,
            tags: vec!["Backend".to_string(), "React".to_string()],
            date: "22 Aug, 2022".to_string(),
            title: "Fix Bug".to_string(),
            description: "Resolve the issue in UI".to_string(),
            assignee: None,
            comments: 8,
        },
        TaskCardView {
            task_id: None,
            tags: vec!["Frontend".to_string(), "UI".to_string()],
            date: "22 Aug, 2022".to_string(),
            title: "Deploy App".to_string(),
            description: "Push latest changes to production".to_string(),
            assignee: None,
            comments: 4,
        },
    ]
}
