mod auth;
mod home;
mod task;

pub use auth::{handle_login, handle_register, serve_login_page, serve_register_page};
pub use home::serve_home;
pub use task::{create_task, delete_all_tasks, delete_task, list_tasks};
