// ABOUTME: Rule-based insights over aggregate health plan statistics
// ABOUTME: Turns averages and counts from stored plans into short human-readable observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Population insights generation
//!
//! The rules here are plain threshold checks against averages computed by the
//! persistence layer. They never touch storage themselves, so the same input
//! statistics always produce the same insight list.

use fitplan_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Thresholds used by the insight rules
pub mod thresholds {
    /// Average BMI above which the population trends obese
    pub const OBESE_BMI: f64 = 30.0;
    /// Average BMI above which the population trends overweight
    pub const OVERWEIGHT_BMI: f64 = 25.0;
    /// Weight-loss calorie average under which deficits are aggressive
    pub const WEIGHT_LOSS_AGGRESSIVE_KCAL: f64 = 2000.0;
    /// Weight-loss calorie average over which the approach is moderate
    pub const WEIGHT_LOSS_MODERATE_KCAL: f64 = 2500.0;
    /// Weight-gain calorie average over which surpluses are significant
    pub const WEIGHT_GAIN_SIGNIFICANT_KCAL: f64 = 3000.0;
    /// Overall calorie average under which targets are deficits
    pub const OVERALL_DEFICIT_KCAL: f64 = 1800.0;
    /// Overall calorie average over which targets are surpluses
    pub const OVERALL_SURPLUS_KCAL: f64 = 2800.0;
    /// Plans per day above which activity counts as high
    pub const HIGH_DAILY_ACTIVITY: i64 = 10;
}

/// Message returned when no plans have been stored yet
pub const NO_DATA_INSIGHT: &str = "No data available for insights";

/// Aggregate statistics over every stored plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanStatistics {
    /// Number of stored plans
    pub total_plans: i64,
    /// Most requested goal and its plan count
    pub most_popular_goal: Option<(String, i64)>,
    /// Mean BMI across plans
    pub average_bmi: Option<f64>,
    /// Mean daily calorie target across plans
    pub average_daily_calories: Option<f64>,
    /// Plans created since midnight UTC
    pub plans_today: i64,
}

/// Observations about the whole population of stored plans
#[must_use]
pub fn population_insights(stats: &PlanStatistics) -> Vec<String> {
    use thresholds::{
        HIGH_DAILY_ACTIVITY, OBESE_BMI, OVERALL_DEFICIT_KCAL, OVERALL_SURPLUS_KCAL,
        OVERWEIGHT_BMI,
    };

    if stats.total_plans == 0 {
        return vec![NO_DATA_INSIGHT.to_owned()];
    }

    let mut insights = Vec::new();

    if let Some((goal, count)) = &stats.most_popular_goal {
        insights.push(format!("Most popular fitness goal: {goal} ({count} plans)"));
    }

    if let Some(bmi) = stats.average_bmi {
        let text = if bmi > OBESE_BMI {
            "Average user BMI indicates obesity, suggesting focus on weight loss"
        } else if bmi > OVERWEIGHT_BMI {
            "Average user BMI indicates overweight, suggesting focus on body composition"
        } else {
            "Average user BMI is in healthy range, suggesting focus on maintenance"
        };
        insights.push(text.to_owned());
    }

    if let Some(calories) = stats.average_daily_calories {
        let text = if calories < OVERALL_DEFICIT_KCAL {
            "Users are generally targeting aggressive calorie deficits"
        } else if calories > OVERALL_SURPLUS_KCAL {
            "Users are generally targeting calorie surpluses for muscle gain"
        } else {
            "Users are generally targeting moderate calorie adjustments"
        };
        insights.push(text.to_owned());
    }

    let activity = if stats.plans_today > HIGH_DAILY_ACTIVITY {
        "High activity today - users are actively seeking fitness guidance"
    } else if stats.plans_today > 0 {
        "Steady activity today - consistent user engagement"
    } else {
        "No activity today - consider promotional campaigns"
    };
    insights.push(activity.to_owned());

    insights
}

/// Observations about plans sharing one fitness goal
#[must_use]
pub fn goal_insights(goal: FitnessGoal, average_bmi: f64, average_calories: f64) -> Vec<String> {
    use thresholds::{
        OBESE_BMI, OVERWEIGHT_BMI, WEIGHT_GAIN_SIGNIFICANT_KCAL, WEIGHT_LOSS_AGGRESSIVE_KCAL,
        WEIGHT_LOSS_MODERATE_KCAL,
    };

    let mut insights = Vec::new();

    match goal {
        FitnessGoal::WeightLoss => {
            if average_calories < WEIGHT_LOSS_AGGRESSIVE_KCAL {
                insights.push("Most users are targeting aggressive calorie deficits");
            } else if average_calories > WEIGHT_LOSS_MODERATE_KCAL {
                insights.push("Users are taking a more moderate approach to weight loss");
            }
            if average_bmi > OBESE_BMI {
                insights.push(
                    "Many users are in the obese category, focusing on sustainable weight loss",
                );
            }
        }
        FitnessGoal::WeightGain => {
            if average_calories > WEIGHT_GAIN_SIGNIFICANT_KCAL {
                insights.push("Users are targeting significant calorie surpluses for muscle gain");
            } else {
                insights.push("Users are taking a conservative approach to weight gain");
            }
        }
        FitnessGoal::LeanBody => {
            if average_bmi < OVERWEIGHT_BMI {
                insights.push("Most users are already in healthy BMI range");
            }
            insights.push("Users are focusing on body composition rather than weight changes");
        }
    }

    insights.into_iter().map(str::to_owned).collect()
}
