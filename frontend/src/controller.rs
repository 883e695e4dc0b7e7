//! Task list state and its transition function.
//!
//! `step` is synchronous and free of browser calls: every remote or
//! display side effect it wants is returned as an [`Effect`] for the
//! mounted application to run. Store responses come back in as response
//! messages (`TasksLoaded`, `TaskCreated`, ...), so local state only
//! changes once the store has confirmed an action.

use crate::theme::Theme;
use shared::{CreateTaskRequest, Task, TaskId, UpdateTaskRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    All,
    Completed,
    Pending,
}

impl FilterMode {
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Refresh,
    TasksLoaded(Vec<Task>),
    SetDraft(String),
    AddTask,
    TaskCreated(Task),
    ToggleTask(TaskId),
    TaskUpdated(Task),
    DeleteTask(TaskId),
    TaskDeleted(TaskId),
    StartEdit(TaskId, String),
    SetEditDraft(String),
    SaveEdit(TaskId),
    TaskSaved(Task),
    CancelEdit,
    SetFilter(FilterMode),
    ToggleTheme,
    Error(String),
}

/// Side effects requested by `step`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchTasks,
    CreateTask { body: CreateTaskRequest },
    UpdateTask { id: TaskId, body: UpdateTaskRequest },
    SaveTask { id: TaskId, body: UpdateTaskRequest },
    DeleteTask { id: TaskId },
    ApplyTheme(Theme),
    Log(String),
}

#[derive(Debug, Clone)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub draft_text: String,
    pub editing_id: Option<TaskId>,
    pub edit_draft_text: String,
    pub filter: FilterMode,
    pub theme: Theme,
}

impl TaskListState {
    pub fn new(theme: Theme) -> Self {
        Self {
            tasks: Vec::new(),
            draft_text: String::new(),
            editing_id: None,
            edit_draft_text: String::new(),
            filter: FilterMode::All,
            theme,
        }
    }

    /// The filtered task sequence for display, in stored order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| match self.filter {
                FilterMode::All => true,
                FilterMode::Completed => task.completed,
                FilterMode::Pending => !task.completed,
            })
            .collect()
    }
}

pub fn step(state: &mut TaskListState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Refresh => vec![Effect::FetchTasks],
        Msg::TasksLoaded(tasks) => {
            state.tasks = tasks;
            vec![]
        }
        Msg::SetDraft(text) => {
            state.draft_text = text;
            vec![]
        }
        Msg::AddTask => {
            if state.draft_text.trim().is_empty() {
                return vec![];
            }
            vec![Effect::CreateTask {
                body: CreateTaskRequest {
                    text: state.draft_text.clone(),
                    completed: false,
                },
            }]
        }
        Msg::TaskCreated(task) => {
            state.tasks.push(task);
            state.draft_text.clear();
            vec![]
        }
        Msg::ToggleTask(id) => {
            if let Some(task) = state.tasks.iter().find(|t| t.id == id) {
                let body = UpdateTaskRequest {
                    text: task.text.clone(),
                    completed: Some(!task.completed),
                };
                vec![Effect::UpdateTask { id, body }]
            } else {
                vec![]
            }
        }
        Msg::TaskUpdated(updated) => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == updated.id) {
                *task = updated;
            }
            vec![]
        }
        Msg::DeleteTask(id) => vec![Effect::DeleteTask { id }],
        Msg::TaskDeleted(id) => {
            state.tasks.retain(|t| t.id != id);
            vec![]
        }
        Msg::StartEdit(id, text) => {
            state.editing_id = Some(id);
            state.edit_draft_text = text;
            vec![]
        }
        Msg::SetEditDraft(text) => {
            state.edit_draft_text = text;
            vec![]
        }
        Msg::SaveEdit(id) => {
            if state.edit_draft_text.trim().is_empty() {
                return vec![];
            }
            // Partial payload: the store preserves the completed flag.
            vec![Effect::SaveTask {
                id,
                body: UpdateTaskRequest {
                    text: state.edit_draft_text.clone(),
                    completed: None,
                },
            }]
        }
        Msg::TaskSaved(saved) => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == saved.id) {
                *task = saved;
            }
            state.editing_id = None;
            vec![]
        }
        Msg::CancelEdit => {
            state.editing_id = None;
            vec![]
        }
        Msg::SetFilter(filter) => {
            state.filter = filter;
            vec![]
        }
        Msg::ToggleTheme => {
            state.theme = state.theme.flipped();
            vec![Effect::ApplyTheme(state.theme)]
        }
        Msg::Error(message) => vec![Effect::Log(message)],
    }
}
