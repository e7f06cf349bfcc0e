use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    // Empty string when the row holds NULL, so the listing never emits null.
    pub deadline: String,
    pub mahasiswa_npm: i64,
}
