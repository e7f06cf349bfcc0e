use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Form, Json, State,
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use bcrypt::{hash, verify};
use std::fs;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{LoginForm, Mahasiswa, RegisterForm};
use crate::services::DatabaseService;

pub async fn serve_login_page() -> AppResult<Response> {
    let login_html = fs::read_to_string("templates/login.html")?;
    Ok(Html(login_html).into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State((database, _)): State<(DatabaseService, Config)>,
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(login_form) = payload.map_err(|e| AppError::Input(e.to_string()))?;
    tracing::info!("Login attempt for npm: {}", login_form.npm);

    let mahasiswa = database
        .get_mahasiswa(login_form.npm)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

    if !verify(&login_form.password, &mahasiswa.password_hash)? {
        tracing::info!("Invalid password for npm: {}", login_form.npm);
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    // No session or cookie is issued; the authenticated state does not
    // outlive this request.
    tracing::info!("Password verified for npm: {}", login_form.npm);
    Ok(Redirect::to("/").into_response())
}

pub async fn serve_register_page() -> AppResult<Response> {
    let register_html = fs::read_to_string("templates/register.html")?;
    Ok(Html(register_html).into_response())
}

pub async fn handle_register(
    State((database, config)): State<(DatabaseService, Config)>,
    payload: Result<Form<RegisterForm>, FormRejection>,
) -> AppResult<Response> {
    let Form(register_form) = payload.map_err(|e| AppError::Input(e.to_string()))?;

    if register_form.npm.is_empty()
        || register_form.username.is_empty()
        || register_form.password.is_empty()
    {
        return Err(AppError::Input("All fields are required".into()));
    }

    let npm: i64 = register_form
        .npm
        .parse()
        .map_err(|_| AppError::Input("npm must be a number".into()))?;

    let password_hash = hash(register_form.password.as_bytes(), config.auth.bcrypt_cost)?;

    // Duplicate npm surfaces as a plain insert failure, same as any other
    // database error.
    database
        .save_mahasiswa(&Mahasiswa {
            npm,
            username: register_form.username,
            password_hash,
        })
        .await?;

    tracing::info!("Registered mahasiswa with npm: {}", npm);
    Ok(Redirect::to("/login").into_response())
}
