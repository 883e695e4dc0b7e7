//! Fetch-based client for the task store.
//!
//! Every failure collapses to a `String`: network errors, non-success
//! statuses, and unparseable bodies are all reported the same way and the
//! caller decides what to do with the message.

use shared::{CreateTaskRequest, Task, TaskId, UpdateTaskRequest};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const API_URL: &str = "/api/tasks/";

pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let window = web_sys::window().ok_or("No window available")?;
    let promise = window.fetch_with_str(API_URL);

    let response: Response = JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to fetch tasks")?
        .into();

    let text = response_text(response).await?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse JSON: {}", e))
}

pub async fn create_task(body: &CreateTaskRequest) -> Result<Task, String> {
    let response = send_json("POST", API_URL, body).await?;
    let text = response_text(response).await?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse JSON: {}", e))
}

pub async fn update_task(id: &TaskId, body: &UpdateTaskRequest) -> Result<Task, String> {
    let url = format!("{}{}/", API_URL, id);
    let response = send_json("PUT", &url, body).await?;
    let text = response_text(response).await?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse JSON: {}", e))
}

pub async fn delete_task(id: &TaskId) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");

    let url = format!("{}{}/", API_URL, id);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|_| "Failed to create request")?;

    let window = web_sys::window().ok_or("No window available")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Failed to send request")?
        .into();

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    // Response body ignored.
    Ok(())
}

async fn send_json<T: serde::Serialize>(
    method: &str,
    url: &str,
    body: &T,
) -> Result<Response, String> {
    let body = serde_json::to_string(body).map_err(|_| "Failed to serialize request")?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| "Failed to create request")?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| "Failed to set header")?;

    let window = web_sys::window().ok_or("No window available")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Failed to send request")?
        .into();

    Ok(response)
}

async fn response_text(response: Response) -> Result<String, String> {
    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    let text_promise = response.text().map_err(|_| "Failed to read response")?;
    JsFuture::from(text_promise)
        .await
        .map_err(|_| "Failed to get text")?
        .as_string()
        .ok_or_else(|| "Failed to convert to string".to_string())
}
