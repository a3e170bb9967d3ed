//! Table definitions for categories and questions
//!
//! Idempotent (`IF NOT EXISTS`); safe to run on every start. Seeding is
//! done outside this crate.

use sqlx::PgPool;

use super::DbError;

/// Create the trivia tables and indexes if they are missing.
///
/// `questions.category` deliberately has no foreign key: inserts accept
/// category ids that do not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring trivia schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia schema ready");
    Ok(())
}
