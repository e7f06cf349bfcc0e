use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use sqlx::Row;

use crate::models::{Mahasiswa, NewTask, Task};

/// Owns the connection pool; every SQL statement the application issues lives
/// here. Handlers receive a clone and never touch SQL directly.
#[derive(Clone)]
pub struct DatabaseService {
    pool: AnyPool,
}

impl DatabaseService {
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = AnyPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Startup connectivity check; failure here is fatal in `main`.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn get_mahasiswa(&self, npm: i64) -> Result<Option<Mahasiswa>, sqlx::Error> {
        let row = sqlx::query("SELECT npm, username, password FROM mahasiswa WHERE npm = ?")
            .bind(npm)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            Ok(Mahasiswa {
                npm: row.try_get("npm")?,
                username: row.try_get("username")?,
                password_hash: row.try_get("password")?,
            })
        })
        .transpose()
    }

    pub async fn save_mahasiswa(&self, mahasiswa: &Mahasiswa) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO mahasiswa (npm, username, password) VALUES (?, ?, ?)")
            .bind(mahasiswa.npm)
            .bind(&mahasiswa.username)
            .bind(&mahasiswa.password_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count_tasks(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await?;
        row.try_get(0)
    }

    pub async fn get_tasks(&self) -> Result<Vec<Task>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, text, completed, deadline, mahasiswa_npm FROM tasks")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                // completed travels as an integer so MySQL and SQLite agree.
                let completed: i64 = row.try_get("completed")?;
                let deadline: Option<String> = row.try_get("deadline")?;
                Ok(Task {
                    id: row.try_get("id")?,
                    text: row.try_get("text")?,
                    completed: completed != 0,
                    deadline: deadline.unwrap_or_default(),
                    mahasiswa_npm: row.try_get("mahasiswa_npm")?,
                })
            })
            .collect()
    }

    pub async fn save_task(&self, task: &NewTask) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tasks (text, completed, deadline, mahasiswa_npm) VALUES (?, ?, ?, ?)",
        )
        .bind(&task.text)
        .bind(task.completed as i64)
        .bind(&task.deadline)
        .bind(task.mahasiswa_npm)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_all_tasks(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM tasks").execute(&self.pool).await?;
        Ok(())
    }

    /// In-memory SQLite service for the test suites. A single connection keeps
    /// every statement on the same memory database.
    #[cfg(test)]
    pub(crate) async fn connect_memory() -> Self {
        sqlx::any::install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        let service = Self { pool };

        sqlx::query(
            "CREATE TABLE mahasiswa (
                npm INTEGER PRIMARY KEY,
                username TEXT NOT NULL,
                password TEXT NOT NULL
            )",
        )
        .execute(&service.pool)
        .await
        .expect("Failed to create mahasiswa table");

        sqlx::query(
            "CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                deadline TEXT,
                mahasiswa_npm INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&service.pool)
        .await
        .expect("Failed to create tasks table");

        service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(text: &str, deadline: Option<&str>) -> NewTask {
        NewTask {
            text: text.to_string(),
            completed: false,
            deadline: deadline.map(str::to_string),
            mahasiswa_npm: 0,
        }
    }

    #[tokio::test]
    async fn mahasiswa_roundtrip() {
        let database = DatabaseService::connect_memory().await;

        database
            .save_mahasiswa(&Mahasiswa {
                npm: 2106701234,
                username: "Budi".into(),
                password_hash: "$2b$04$fakehash".into(),
            })
            .await
            .unwrap();

        let found = database.get_mahasiswa(2106701234).await.unwrap().unwrap();
        assert_eq!(found.username, "Budi");
        assert_eq!(found.password_hash, "$2b$04$fakehash");

        assert!(database.get_mahasiswa(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_deadline_reads_back_as_empty_string() {
        let database = DatabaseService::connect_memory().await;

        database.save_task(&new_task("Buy milk", None)).await.unwrap();
        database
            .save_task(&new_task("Submit report", Some("2024-12-01")))
            .await
            .unwrap();

        let tasks = database.get_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        let milk = tasks.iter().find(|t| t.text == "Buy milk").unwrap();
        assert_eq!(milk.deadline, "");
        let report = tasks.iter().find(|t| t.text == "Submit report").unwrap();
        assert_eq!(report.deadline, "2024-12-01");
    }

    #[tokio::test]
    async fn delete_by_id_leaves_other_rows() {
        let database = DatabaseService::connect_memory().await;

        database.save_task(&new_task("first", None)).await.unwrap();
        database.save_task(&new_task("second", None)).await.unwrap();

        let tasks = database.get_tasks().await.unwrap();
        let first = tasks.iter().find(|t| t.text == "first").unwrap();
        database.delete_task(first.id).await.unwrap();

        let remaining = database.get_tasks().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "second");

        // Deleting an id that is already gone is not an error.
        database.delete_task(first.id).await.unwrap();
    }

    #[tokio::test]
    async fn delete_all_empties_the_table() {
        let database = DatabaseService::connect_memory().await;

        for i in 0..3 {
            database
                .save_task(&new_task(&format!("task {}", i), None))
                .await
                .unwrap();
        }
        assert_eq!(database.count_tasks().await.unwrap(), 3);

        database.delete_all_tasks().await.unwrap();
        assert_eq!(database.count_tasks().await.unwrap(), 0);
        assert!(database.get_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_npm_insert_fails() {
        let database = DatabaseService::connect_memory().await;

        let mahasiswa = Mahasiswa {
            npm: 1,
            username: "Ani".into(),
            password_hash: "$2b$04$fakehash".into(),
        };
        database.save_mahasiswa(&mahasiswa).await.unwrap();
        assert!(database.save_mahasiswa(&mahasiswa).await.is_err());
    }
}
