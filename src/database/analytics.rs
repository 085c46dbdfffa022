// ABOUTME: Aggregate queries over stored health plans
// ABOUTME: Counts, distributions, averages and per-day trends feeding the analytics routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use super::health_plans::round_to_hundredths;
use super::Database;
use crate::errors::AppResult;
use crate::models::{
    AnalyticsOverview, AverageMetrics, DailyCount, GoalAnalytics, GoalAverages, TrendAnalytics,
};
use chrono::{DateTime, Duration, Utc};
use fitplan_core::models::FitnessGoal;
use fitplan_intelligence::{goal_insights, PlanStatistics};
use sqlx::Row;
use std::collections::BTreeMap;

/// Days covered by the trends view
pub const TREND_WINDOW_DAYS: i64 = 30;

/// Label reported for the trends window
pub const TREND_PERIOD_LABEL: &str = "last_30_days";

const WEEK_DAYS: i64 = 7;

impl Database {
    /// Totals, recent activity, distributions and averages
    ///
    /// "Today" is the UTC calendar day of `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregate query fails
    pub async fn analytics_overview(&self, now: DateTime<Utc>) -> AppResult<AnalyticsOverview> {
        let total = self.count_plans().await?;
        let plans_today = self.count_plans_on_day(now).await?;
        let plans_this_week = self.count_plans_since(now - Duration::days(WEEK_DAYS)).await?;

        let row = sqlx::query(
            r"
            SELECT AVG(bmi) AS avg_bmi, AVG(daily_calories) AS avg_calories, AVG(bmr) AS avg_bmr
            FROM health_plans
            ",
        )
        .fetch_one(&self.pool)
        .await?;

        let average_bmi: Option<f64> = row.try_get("avg_bmi")?;
        let average_calories: Option<f64> = row.try_get("avg_calories")?;
        let average_bmr: Option<f64> = row.try_get("avg_bmr")?;

        Ok(AnalyticsOverview {
            total_plans_generated: total,
            plans_today,
            plans_this_week,
            goal_distribution: self.goal_distribution().await?,
            gender_distribution: self.count_by_column("gender").await?,
            age_distribution: self.age_distribution().await?,
            average_metrics: AverageMetrics {
                bmi: average_bmi.map(round_to_hundredths),
                daily_calories: average_calories.map(f64::round),
                bmr: average_bmr.map(f64::round),
            },
        })
    }

    /// Averages and rule-based insights for plans sharing one goal
    ///
    /// # Errors
    ///
    /// Returns an error if the aggregate query fails
    pub async fn goal_analytics(&self, goal: FitnessGoal) -> AppResult<GoalAnalytics> {
        let row = sqlx::query(
            r"
            SELECT COUNT(*) AS total, AVG(bmi) AS avg_bmi,
                   AVG(daily_calories) AS avg_calories, AVG(bmr) AS avg_bmr
            FROM health_plans
            WHERE fitness_goal = ?1
            ",
        )
        .bind(goal.as_str())
        .fetch_one(&self.pool)
        .await?;

        let total: i64 = row.try_get("total")?;

        // AVG is NULL exactly when no plan matches
        let (Some(bmi), Some(calories), Some(bmr)) = (
            row.try_get::<Option<f64>, _>("avg_bmi")?,
            row.try_get::<Option<f64>, _>("avg_calories")?,
            row.try_get::<Option<f64>, _>("avg_bmr")?,
        ) else {
            return Ok(GoalAnalytics {
                goal_type: goal.as_str().to_owned(),
                total_plans: 0,
                average_metrics: None,
                insights: Vec::new(),
            });
        };

        Ok(GoalAnalytics {
            goal_type: goal.as_str().to_owned(),
            total_plans: total,
            average_metrics: Some(GoalAverages {
                bmi: round_to_hundredths(bmi),
                daily_calories: calories.round(),
                bmr: bmr.round(),
            }),
            insights: goal_insights(goal, bmi, calories),
        })
    }

    /// Plans per day and per goal per day over the trailing window
    ///
    /// # Errors
    ///
    /// Returns an error if a trend query fails
    pub async fn trend_analytics(&self, now: DateTime<Utc>) -> AppResult<TrendAnalytics> {
        let since = now - Duration::days(TREND_WINDOW_DAYS);

        let daily_rows = sqlx::query(
            r"
            SELECT date(created_at) AS day, COUNT(*) AS count
            FROM health_plans
            WHERE julianday(created_at) >= julianday(?1)
            GROUP BY day
            ORDER BY day
            ",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        let daily_trends = daily_rows
            .iter()
            .map(|row| -> AppResult<DailyCount> {
                Ok(DailyCount {
                    date: row.try_get("day")?,
                    count: row.try_get("count")?,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let goal_rows = sqlx::query(
            r"
            SELECT date(created_at) AS day, fitness_goal, COUNT(*) AS count
            FROM health_plans
            WHERE julianday(created_at) >= julianday(?1)
            GROUP BY day, fitness_goal
            ORDER BY day
            ",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        let mut goal_trends: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();
        for row in &goal_rows {
            let goal: String = row.try_get("fitness_goal")?;
            let day: String = row.try_get("day")?;
            let count: i64 = row.try_get("count")?;
            goal_trends.entry(goal).or_default().insert(day, count);
        }

        Ok(TrendAnalytics {
            daily_trends,
            goal_trends,
            period: TREND_PERIOD_LABEL.to_owned(),
        })
    }

    /// Inputs for the population insight rules
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregate query fails
    pub async fn plan_statistics(&self, now: DateTime<Utc>) -> AppResult<PlanStatistics> {
        let total_plans = self.count_plans().await?;
        if total_plans == 0 {
            return Ok(PlanStatistics::default());
        }

        let most_popular_goal = sqlx::query(
            r"
            SELECT fitness_goal, COUNT(*) AS count
            FROM health_plans
            GROUP BY fitness_goal
            ORDER BY count DESC, fitness_goal
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await?
        .map(|row| -> AppResult<(String, i64)> {
            Ok((row.try_get("fitness_goal")?, row.try_get("count")?))
        })
        .transpose()?;

        let row = sqlx::query(
            "SELECT AVG(bmi) AS avg_bmi, AVG(daily_calories) AS avg_calories FROM health_plans",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(PlanStatistics {
            total_plans,
            most_popular_goal,
            average_bmi: row.try_get("avg_bmi")?,
            average_daily_calories: row.try_get("avg_calories")?,
            plans_today: self.count_plans_on_day(now).await?,
        })
    }

    async fn count_plans(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM health_plans")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_plans_on_day(&self, day: DateTime<Utc>) -> AppResult<i64> {
        let count =
            sqlx::query_scalar("SELECT COUNT(*) FROM health_plans WHERE date(created_at) = date(?1)")
                .bind(day)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn count_plans_since(&self, since: DateTime<Utc>) -> AppResult<i64> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(*) FROM health_plans WHERE julianday(created_at) >= julianday(?1)",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Plan count per age bracket; ages under 25 land in 18-24
    async fn age_distribution(&self) -> AppResult<BTreeMap<String, i64>> {
        let rows = sqlx::query(
            r"
            SELECT CASE
                       WHEN age < 25 THEN '18-24'
                       WHEN age < 35 THEN '25-34'
                       WHEN age < 45 THEN '35-44'
                       WHEN age < 55 THEN '45-54'
                       WHEN age < 65 THEN '55-64'
                       ELSE '65+'
                   END AS age_group,
                   COUNT(*) AS count
            FROM health_plans
            GROUP BY age_group
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> AppResult<(String, i64)> {
                Ok((row.try_get("age_group")?, row.try_get("count")?))
            })
            .collect()
    }
}
