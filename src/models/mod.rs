mod forms;
mod mahasiswa;
mod task;

pub use forms::{LoginForm, NewTask, RegisterForm};
pub use mahasiswa::Mahasiswa;
pub use task::Task;
