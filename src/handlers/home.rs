use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::fs;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::DatabaseService;

pub async fn serve_home(
    State((database, config)): State<(DatabaseService, Config)>,
) -> AppResult<Response> {
    let task_count = database.count_tasks().await?;

    // The original bounced to the login page whenever the task table was
    // empty, as a stand-in for a real auth check. Kept, but switchable.
    if task_count == 0 && config.server.redirect_when_empty {
        tracing::debug!("No tasks yet, redirecting to login");
        return Ok(Redirect::to("/login").into_response());
    }

    let tasks = database.get_tasks().await?;
    let index_html = fs::read_to_string("templates/index.html")?;

    let tasks_html = tasks
        .iter()
        .map(|task| {
            format!(
                r#"<li data-id="{}">
                <input type="checkbox" {} disabled>
                <span class="{}">{}</span>
                <button class="remove" onclick="removeTask({})">Hapus</button>
            </li>"#,
                task.id,
                if task.completed { "checked" } else { "" },
                if task.completed { "completed" } else { "" },
                task.text,
                task.id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    tracing::info!("Rendered home page with {} tasks", tasks.len());
    Ok(Html(index_html.replace("{{tasks}}", &tasks_html)).into_response())
}
