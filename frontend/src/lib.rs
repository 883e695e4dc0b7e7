use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::Task;
use web_sys::console;

pub mod api;
pub mod controller;
pub mod theme;

use controller::{Effect, FilterMode, Msg, TaskListState};
use theme::Theme;

pub struct Model {
    state: TaskListState,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            state: TaskListState::new(Theme::load()),
        }
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        // Reflect the persisted preference before the first paint, then
        // pull the task collection from the store.
        self.state.theme.apply();
        Cmd::new(async { Msg::Refresh })
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        let effects = controller::step(&mut self.state, msg);
        if effects.is_empty() {
            Cmd::none()
        } else {
            Cmd::batch(effects.into_iter().map(run_effect).collect::<Vec<_>>())
        }
    }

    fn view(&self) -> Node<Msg> {
        div(
            [class("app-container")],
            [
                h2([], [text("To-Do List")]),
                button([class("theme-toggle"), on_click(|_| Msg::ToggleTheme)], [
                    text(match self.state.theme {
                        Theme::Dark => "☀️",
                        Theme::Light => "🌙",
                    }),
                ]),
                div(
                    [class("todo-container")],
                    [
                        input(
                            [
                                r#type("text"),
                                placeholder("Add a new task..."),
                                value(&self.state.draft_text),
                                on_input(|event| Msg::SetDraft(event.value())),
                            ],
                            [],
                        ),
                        button([on_click(|_| Msg::AddTask)], [text("Add Task")]),
                        self.view_filters(),
                        ul(
                            [],
                            self.state
                                .visible_tasks()
                                .into_iter()
                                .map(|task| self.view_task(task))
                                .collect::<Vec<_>>(),
                        ),
                    ],
                ),
            ],
        )
    }
}

impl Model {
    fn view_filters(&self) -> Node<Msg> {
        div(
            [class("filters")],
            [FilterMode::All, FilterMode::Completed, FilterMode::Pending]
                .into_iter()
                .map(|filter| {
                    button(
                        [on_click(move |_| Msg::SetFilter(filter))],
                        [text(filter.label())],
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    fn view_task(&self, task: &Task) -> Node<Msg> {
        let is_editing = self.state.editing_id.as_ref() == Some(&task.id);

        li(
            [
                key(task.id.to_string()),
                class(if task.completed { "completed" } else { "" }),
            ],
            if is_editing {
                vec![
                    input(
                        [
                            r#type("text"),
                            value(&self.state.edit_draft_text),
                            on_input(|event| Msg::SetEditDraft(event.value())),
                        ],
                        [],
                    ),
                    button(
                        [on_click({
                            let id = task.id.clone();
                            move |_| Msg::SaveEdit(id.clone())
                        })],
                        [text("Save")],
                    ),
                    button([on_click(|_| Msg::CancelEdit)], [text("Cancel")]),
                ]
            } else {
                vec![
                    input(
                        [
                            r#type("checkbox"),
                            checked(task.completed),
                            on_click({
                                let id = task.id.clone();
                                move |_| Msg::ToggleTask(id.clone())
                            }),
                        ],
                        [],
                    ),
                    span([], [text(&task.text)]),
                    button(
                        [on_click({
                            let id = task.id.clone();
                            let task_text = task.text.clone();
                            move |_| Msg::StartEdit(id.clone(), task_text.clone())
                        })],
                        [text("Edit")],
                    ),
                    button(
                        [on_click({
                            let id = task.id.clone();
                            move |_| Msg::DeleteTask(id.clone())
                        })],
                        [text("Delete")],
                    ),
                ]
            },
        )
    }
}

fn run_effect(effect: Effect) -> Cmd<Msg> {
    match effect {
        Effect::FetchTasks => Cmd::new(async {
            match api::fetch_tasks().await {
                Ok(tasks) => Msg::TasksLoaded(tasks),
                Err(e) => Msg::Error(e),
            }
        }),
        Effect::CreateTask { body } => Cmd::new(async move {
            match api::create_task(&body).await {
                Ok(task) => Msg::TaskCreated(task),
                Err(e) => Msg::Error(e),
            }
        }),
        Effect::UpdateTask { id, body } => Cmd::new(async move {
            match api::update_task(&id, &body).await {
                Ok(task) => Msg::TaskUpdated(task),
                Err(e) => Msg::Error(e),
            }
        }),
        Effect::SaveTask { id, body } => Cmd::new(async move {
            match api::update_task(&id, &body).await {
                Ok(task) => Msg::TaskSaved(task),
                Err(e) => Msg::Error(e),
            }
        }),
        Effect::DeleteTask { id } => Cmd::new(async move {
            match api::delete_task(&id).await {
                Ok(()) => Msg::TaskDeleted(id),
                Err(e) => Msg::Error(e),
            }
        }),
        Effect::ApplyTheme(theme) => {
            theme.apply();
            Cmd::none()
        }
        Effect::Log(message) => {
            console::error_1(&message.into());
            Cmd::none()
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    Program::mount_to_body(Model::default());
}
