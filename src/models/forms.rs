use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub npm: i64,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub npm: String,
    pub username: String,
    pub password: String,
}

/// Task body as submitted by the front-end; everything but the text is
/// optional.
#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub mahasiswa_npm: i64,
}
