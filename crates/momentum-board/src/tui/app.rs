/*
[INPUT]:  BoardApi handle, UI event sender, log buffer, task source
[OUTPUT]: AppState holding the board, selection, filters and the active modal
[POS]:    TUI app state and modal submit flows
[UPDATE]: 2026-10-14 Replace task runtime state with the kanban board model
[UPDATE]: 2026-10-14 Spawn create calls and apply results from UiEvent
[UPDATE]: 2026-10-15 Add task detail modal
[UPDATE]: 2026-10-19 Tag create calls with a submission id and drop stale results
*/

use std::sync::Arc;

use momentum_adapter::{Employee, Task};
use momentum_board::board::TaskCardView;
use momentum_board::forms::{
    CreateTaskData, CreateTaskForm, EmployeeModal, Route, TaskSubmitOutcome,
};
use momentum_board::{BoardApi, Filters, TaskBoard, TaskSource};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::tui::LogBufferHandle;
use crate::tui::runtime::UiEvent;
use crate::tui::ui::modal::{CreateTaskModal, EmployeeModalView, TaskDetailView};

pub(super) enum ActiveModal {
    CreateTask(CreateTaskModal),
    CreateEmployee(EmployeeModalView),
    TaskDetail(TaskDetailView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Board,
    Logs,
}

pub(super) struct AppState {
    pub(super) api: Arc<dyn BoardApi>,
    pub(super) event_tx: UnboundedSender<UiEvent>,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) task_source: TaskSource,
    pub(super) board: TaskBoard,
    pub(super) filters: Filters,
    pub(super) selected_column: usize,
    pub(super) selected_card: usize,
    pub(super) current_tab: Tab,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
    next_submission: u64,
}

impl AppState {
    pub(super) fn new(
        api: Arc<dyn BoardApi>,
        event_tx: UnboundedSender<UiEvent>,
        log_buffer: LogBufferHandle,
        task_source: TaskSource,
    ) -> Self {
        Self {
            api,
            event_tx,
            log_buffer,
            task_source,
            board: TaskBoard::build(&[], &[], task_source),
            filters: Filters::default(),
            selected_column: 0,
            selected_card: 0,
            current_tab: Tab::Board,
            status_message: "Loading board...".to_string(),
            active_modal: None,
            next_submission: 0,
        }
    }

    pub(super) async fn refresh_board(&mut self) {
        self.board = TaskBoard::load(self.api.as_ref(), self.task_source).await;
        self.clamp_selection();
        self.status_message = format!(
            "{} columns, {} tasks",
            self.board.columns().len(),
            self.board.card_count()
        );
    }

    pub(super) async fn open_create_task(&mut self) {
        let data = CreateTaskData::load(self.api.as_ref()).await;
        if data.employees.is_empty() {
            self.status_message = "no employees loaded; add one with [e]".to_string();
        }
        self.active_modal = Some(ActiveModal::CreateTask(CreateTaskModal::new(
            CreateTaskForm::new(data),
        )));
    }

    pub(super) async fn open_create_employee(&mut self) {
        let mut form = EmployeeModal::new();
        form.open(self.api.as_ref()).await;
        self.active_modal = Some(ActiveModal::CreateEmployee(EmployeeModalView::new(form)));
    }

    pub(super) async fn open_selected_task(&mut self) {
        let Some(card) = self.selected_card() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        let Some(task_id) = card.task_id else {
            self.status_message = "mock tasks have no details".to_string();
            return;
        };

        let task = self.api.task_by_id(task_id).await;
        if task.is_none() {
            warn!(task_id, "task detail unavailable");
        }
        self.active_modal = Some(ActiveModal::TaskDetail(TaskDetailView::new(task_id, task)));
    }

    /// Close whatever modal is open, resetting the employee form
    pub(super) fn close_modal(&mut self) {
        if let Some(ActiveModal::CreateEmployee(view)) = self.active_modal.as_mut() {
            view.form_mut().close();
        }
        self.active_modal = None;
    }

    pub(super) fn selected_card(&self) -> Option<&TaskCardView> {
        self.board
            .column(self.selected_column)?
            .cards
            .get(self.selected_card)
    }

    pub(super) fn move_column(&mut self, delta: isize) {
        let len = self.board.columns().len();
        if len == 0 {
            return;
        }
        self.selected_column = step(self.selected_column, delta, len);
        self.clamp_selection();
    }

    pub(super) fn move_card(&mut self, delta: isize) {
        let len = self
            .board
            .column(self.selected_column)
            .map(|column| column.cards.len())
            .unwrap_or(0);
        if len == 0 {
            return;
        }
        self.selected_card = step(self.selected_card, delta, len);
    }

    fn clamp_selection(&mut self) {
        let columns = self.board.columns().len();
        self.selected_column = self.selected_column.min(columns.saturating_sub(1));
        let cards = self
            .board
            .column(self.selected_column)
            .map(|column| column.cards.len())
            .unwrap_or(0);
        self.selected_card = self.selected_card.min(cards.saturating_sub(1));
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Board => Tab::Logs,
            Tab::Logs => Tab::Board,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub(super) fn submit_active_modal(&mut self) {
        match self.active_modal.as_ref() {
            Some(ActiveModal::CreateTask(_)) => self.submit_create_task(),
            Some(ActiveModal::CreateEmployee(_)) => self.submit_create_employee(),
            Some(ActiveModal::TaskDetail(_)) | None => {}
        }
    }

    fn allocate_submission(&mut self) -> u64 {
        self.next_submission += 1;
        self.next_submission
    }

    fn submit_create_task(&mut self) {
        let submission = self.allocate_submission();
        let Some(ActiveModal::CreateTask(modal)) = self.active_modal.as_mut() else {
            return;
        };
        let request = match modal.form_mut().begin_submit() {
            Ok(request) => request,
            Err(err) => {
                self.status_message = err.to_string();
                return;
            }
        };

        modal.set_submission(Some(submission));

        debug!(submission, name = %request.name, employee_id = request.employee_id, "submitting task");
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.create_task(request).await;
            let _ = event_tx.send(UiEvent::TaskCreated { submission, result });
        });
        self.status_message = "creating task...".to_string();
    }

    fn submit_create_employee(&mut self) {
        let submission = self.allocate_submission();
        let Some(ActiveModal::CreateEmployee(view)) = self.active_modal.as_mut() else {
            return;
        };
        view.set_notice(None);
        let request = match view.form_mut().begin_submit() {
            Ok(request) => request,
            Err(err) => {
                self.status_message = err.to_string();
                return;
            }
        };

        view.set_submission(Some(submission));

        debug!(submission, department_id = request.department_id, "submitting employee");
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.create_employee(request).await;
            let _ = event_tx.send(UiEvent::EmployeeCreated { submission, result });
        });
        self.status_message = "adding employee...".to_string();
    }

    pub(super) async fn on_task_created(
        &mut self,
        submission: u64,
        result: momentum_adapter::Result<Task>,
    ) {
        let form = match self.active_modal.as_mut() {
            Some(ActiveModal::CreateTask(modal)) if modal.submission() == Some(submission) => {
                modal.set_submission(None);
                modal.form_mut()
            }
            _ => {
                // The form that sent this request was cancelled
                match result {
                    Ok(task) => {
                        info!(submission, task_id = task.id, "task created after its form was closed");
                        self.refresh_board().await;
                    }
                    Err(err) => {
                        warn!(submission, error = %err, "create task failed after its form was closed")
                    }
                }
                return;
            }
        };

        match form.complete_submit(result) {
            Ok(TaskSubmitOutcome::Navigate(Route::TaskList)) => {
                self.close_modal();
                self.set_tab(Tab::Board);
                self.refresh_board().await;
                self.status_message = format!("Task created. {}", self.status_message);
            }
            Err(err) => self.status_message = format!("create task failed: {err}"),
        }
    }

    pub(super) fn on_employee_created(
        &mut self,
        submission: u64,
        result: momentum_adapter::Result<Employee>,
    ) {
        let view = match self.active_modal.as_mut() {
            Some(ActiveModal::CreateEmployee(view)) if view.submission() == Some(submission) => {
                view.set_submission(None);
                view
            }
            _ => {
                match result {
                    Ok(employee) => {
                        self.status_message =
                            format!("Employee created: {}", employee.full_name());
                    }
                    Err(err) => {
                        warn!(submission, error = %err, "add employee failed after its form was closed")
                    }
                }
                return;
            }
        };

        match view.form_mut().complete_submit(result) {
            Ok(employee) => {
                self.close_modal();
                self.status_message = format!("Employee created: {}", employee.full_name());
            }
            Err(err) => self.status_message = format!("add employee failed: {err}"),
        }
    }

    pub(super) async fn attach_avatar(&mut self) {
        let Some(ActiveModal::CreateEmployee(view)) = self.active_modal.as_mut() else {
            return;
        };
        let path = view.avatar_path();
        match view.form_mut().select_avatar_file(&path).await {
            Ok(()) => view.set_notice(None),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "avatar rejected");
                view.set_notice(Some(err.to_string()));
            }
        }
    }

    pub(super) fn remove_avatar(&mut self) {
        if let Some(ActiveModal::CreateEmployee(view)) = self.active_modal.as_mut() {
            view.form_mut().remove_avatar();
            view.set_notice(None);
        }
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
