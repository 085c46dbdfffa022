// ABOUTME: Health plan summary storage and retrieval
// ABOUTME: Persists a denormalized row per generated plan for listing and analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use super::Database;
use crate::errors::AppResult;
use crate::models::{PlanSummary, StoredHealthPlan};
use fitplan_intelligence::HealthPlan;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::collections::BTreeMap;

const PLAN_COLUMNS: &str = r"
    id, user_id, age, gender, height, weight, activity_level, fitness_goal,
    bmi, bmr, tdee, daily_calories, protein_grams, carbs_grams, fat_grams,
    water_intake, sleep_recommendation, created_at
";

impl Database {
    /// Create the `health_plans` table
    pub(super) async fn migrate_health_plans(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL,
                height REAL NOT NULL,
                weight REAL NOT NULL,
                activity_level TEXT NOT NULL,
                fitness_goal TEXT NOT NULL,
                bmi REAL NOT NULL,
                bmr INTEGER NOT NULL,
                tdee INTEGER NOT NULL,
                daily_calories INTEGER NOT NULL,
                protein_grams INTEGER NOT NULL,
                carbs_grams INTEGER NOT NULL,
                fat_grams INTEGER NOT NULL,
                water_intake TEXT NOT NULL,
                sleep_recommendation TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_health_plans_user_id ON health_plans(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_health_plans_created_at ON health_plans(created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store the summary of a generated plan, returning its row id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_health_plan(
        &self,
        plan: &HealthPlan,
        user_id: Option<i64>,
    ) -> AppResult<i64> {
        let profile = &plan.user_data;

        let result = sqlx::query(
            r"
            INSERT INTO health_plans (
                user_id, age, gender, height, weight, activity_level, fitness_goal,
                bmi, bmr, tdee, daily_calories, protein_grams, carbs_grams, fat_grams,
                water_intake, sleep_recommendation, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
            ",
        )
        .bind(user_id)
        .bind(i64::from(profile.age()))
        .bind(profile.gender().as_str())
        .bind(profile.height_cm())
        .bind(profile.weight_kg())
        .bind(profile.activity_level().as_str())
        .bind(profile.fitness_goal().as_str())
        .bind(plan.metrics.bmi.value)
        .bind(plan.metrics.bmr)
        .bind(plan.metrics.tdee)
        .bind(plan.daily_calories)
        .bind(plan.macros.protein.grams)
        .bind(plan.macros.carbs.grams)
        .bind(plan.macros.fat.grams)
        .bind(&plan.water_intake)
        .bind(&plan.sleep_recommendation)
        .bind(plan.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List stored plan summaries, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_health_plans(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<StoredHealthPlan>> {
        let query =
            format!("SELECT {PLAN_COLUMNS} FROM health_plans ORDER BY id LIMIT ?1 OFFSET ?2");

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_health_plan).collect()
    }

    /// Get a stored plan summary by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_health_plan(&self, plan_id: i64) -> AppResult<Option<StoredHealthPlan>> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM health_plans WHERE id = ?1");

        let row = sqlx::query(&query)
            .bind(plan_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_health_plan).transpose()
    }

    /// Delete a stored plan; returns false when no row matched
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_health_plan(&self, plan_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM health_plans WHERE id = ?1")
            .bind(plan_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count, goal distribution and averages over every stored plan
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregate query fails
    pub async fn health_plan_summary(&self) -> AppResult<PlanSummary> {
        let row = sqlx::query(
            r"
            SELECT COUNT(*) AS total, AVG(bmi) AS avg_bmi, AVG(daily_calories) AS avg_calories
            FROM health_plans
            ",
        )
        .fetch_one(&self.pool)
        .await?;

        let total: i64 = row.try_get("total")?;
        let average_bmi: Option<f64> = row.try_get("avg_bmi")?;
        let average_daily_calories: Option<f64> = row.try_get("avg_calories")?;

        Ok(PlanSummary {
            total_plans_generated: total,
            goal_distribution: self.goal_distribution().await?,
            average_bmi: average_bmi.map(round_to_hundredths),
            average_daily_calories: average_daily_calories.map(f64::round),
        })
    }

    /// Plan count per fitness goal
    pub(super) async fn goal_distribution(&self) -> AppResult<BTreeMap<String, i64>> {
        self.count_by_column("fitness_goal").await
    }

    /// Plan count per distinct value of a text column
    pub(super) async fn count_by_column(&self, column: &str) -> AppResult<BTreeMap<String, i64>> {
        let query = format!(
            "SELECT {column} AS label, COUNT(*) AS count FROM health_plans GROUP BY {column}"
        );

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| -> AppResult<(String, i64)> {
                Ok((row.try_get("label")?, row.try_get("count")?))
            })
            .collect()
    }

    /// Convert a database row to a `StoredHealthPlan`
    fn row_to_health_plan(row: &SqliteRow) -> AppResult<StoredHealthPlan> {
        Ok(StoredHealthPlan {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            age: row.try_get("age")?,
            gender: row.try_get("gender")?,
            height: row.try_get("height")?,
            weight: row.try_get("weight")?,
            activity_level: row.try_get("activity_level")?,
            fitness_goal: row.try_get("fitness_goal")?,
            bmi: row.try_get("bmi")?,
            bmr: row.try_get("bmr")?,
            tdee: row.try_get("tdee")?,
            daily_calories: row.try_get("daily_calories")?,
            protein_grams: row.try_get("protein_grams")?,
            carbs_grams: row.try_get("carbs_grams")?,
            fat_grams: row.try_get("fat_grams")?,
            water_intake: row.try_get("water_intake")?,
            sleep_recommendation: row.try_get("sleep_recommendation")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Round to two decimals, half away from zero
pub(super) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
