/// A registered account, keyed by student number.
#[derive(Debug, Clone)]
pub struct Mahasiswa {
    pub npm: i64,
    pub username: String,
    pub password_hash: String, // bcrypt output, never the plaintext
}
