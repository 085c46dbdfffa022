// ABOUTME: Built-in reference tables for the health metrics engine
// ABOUTME: BMI bands, activity multipliers, goal splits, recommendation bundles, nutrients and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use super::{
    ActivityRecommendations, BmiBand, GoalAdjustment, MacroRatios, NutrientReference,
    ReferenceDataset, SleepReference, TimelineEstimate, WaterIntakeReference,
};
use fitplan_core::models::{ActivityLevel, FitnessGoal};
use std::collections::BTreeMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

fn band(min: f64, max: f64, category: &str, color: &str) -> BmiBand {
    BmiBand {
        min,
        max,
        category: category.to_owned(),
        color: color.to_owned(),
    }
}

fn goal(calorie_adjustment: i32, ratios: (f64, f64, f64), description: &str) -> GoalAdjustment {
    GoalAdjustment {
        calorie_adjustment,
        ratios: MacroRatios {
            protein: ratios.0,
            carbs: ratios.1,
            fat: ratios.2,
        },
        description: description.to_owned(),
    }
}

fn nutrient(name: &str, sources: &[&str], benefits: &str, daily: &str) -> NutrientReference {
    NutrientReference {
        name: name.to_owned(),
        sources: strings(sources),
        benefits: benefits.to_owned(),
        daily: daily.to_owned(),
    }
}

pub(super) fn dataset() -> ReferenceDataset {
    ReferenceDataset {
        bmi_bands: vec![
            band(0.0, 18.4, "Underweight", "#ff6b6b"),
            band(18.5, 24.9, "Normal Weight", "#48bb78"),
            band(25.0, 29.9, "Overweight", "#f6ad55"),
            band(30.0, 100.0, "Obese", "#e53e3e"),
        ],
        activity_multipliers: BTreeMap::from([
            (ActivityLevel::Sedentary, 1.2),
            (ActivityLevel::LightlyActive, 1.375),
            (ActivityLevel::ModeratelyActive, 1.55),
            (ActivityLevel::VeryActive, 1.725),
            (ActivityLevel::ExtremelyActive, 1.9),
        ]),
        goal_adjustments: BTreeMap::from([
            (
                FitnessGoal::WeightLoss,
                goal(-500, (0.3, 0.4, 0.3), "Calorie deficit for weight loss"),
            ),
            (
                FitnessGoal::WeightGain,
                goal(300, (0.25, 0.5, 0.25), "Calorie surplus for weight gain"),
            ),
            (
                FitnessGoal::LeanBody,
                goal(0, (0.3, 0.45, 0.25), "Maintenance calories for lean body"),
            ),
        ]),
        water_intake: water_intake(),
        sleep: SleepReference {
            duration: "7-9 hours per night".to_owned(),
            quality: strings(&[
                "Maintain consistent sleep schedule",
                "Create a relaxing bedtime routine",
                "Keep bedroom cool, dark, and quiet",
                "Avoid screens 1 hour before bed",
                "Exercise regularly but not close to bedtime",
            ]),
        },
        activity_recommendations: activity_recommendations(),
        timeline_estimates: timeline_estimates(),
        nutrients: nutrients(),
        health_tips: health_tips(),
    }
}

fn water_intake() -> WaterIntakeReference {
    let high = "3.5-4.5 liters per day";
    WaterIntakeReference {
        base: "2.7-3.7 liters per day".to_owned(),
        activity_overrides: BTreeMap::from([
            (ActivityLevel::ModeratelyActive, high.to_owned()),
            (ActivityLevel::VeryActive, high.to_owned()),
            (
                ActivityLevel::ExtremelyActive,
                "4-5 liters per day".to_owned(),
            ),
        ]),
        factors: strings(&[
            "Add 0.5-1 liter for each hour of exercise",
            "Increase intake in hot weather or high altitude",
            "Monitor urine color (should be light yellow)",
            "Drink water throughout the day, not just when thirsty",
        ]),
    }
}

fn activity_recommendations() -> BTreeMap<FitnessGoal, ActivityRecommendations> {
    BTreeMap::from([
        (
            FitnessGoal::WeightLoss,
            ActivityRecommendations {
                cardio: strings(&[
                    "30-45 minutes of moderate cardio 5-6 days/week",
                    "High-intensity interval training (HIIT) 2-3 days/week",
                    "Walking 10,000+ steps daily",
                    "Swimming or cycling for low-impact options",
                ]),
                strength: strings(&[
                    "Full-body strength training 3-4 days/week",
                    "Focus on compound movements (squats, deadlifts, push-ups)",
                    "Circuit training for calorie burn",
                    "Bodyweight exercises for convenience",
                ]),
                flexibility: strings(&[
                    "Stretching 10-15 minutes daily",
                    "Yoga 2-3 times per week",
                    "Foam rolling for muscle recovery",
                ]),
            },
        ),
        (
            FitnessGoal::WeightGain,
            ActivityRecommendations {
                cardio: strings(&[
                    "20-30 minutes of light cardio 2-3 days/week",
                    "Focus on walking or light cycling",
                    "Avoid excessive cardio to preserve calories",
                ]),
                strength: strings(&[
                    "Progressive overload strength training 4-5 days/week",
                    "Focus on compound movements with heavy weights",
                    "Allow 48-72 hours between muscle group training",
                    "Include isolation exercises for muscle definition",
                ]),
                flexibility: strings(&[
                    "Dynamic stretching before workouts",
                    "Static stretching after workouts",
                    "Focus on mobility for better exercise form",
                ]),
            },
        ),
        (
            FitnessGoal::LeanBody,
            ActivityRecommendations {
                cardio: strings(&[
                    "30 minutes of moderate cardio 3-4 days/week",
                    "Mix of steady-state and interval training",
                    "Include fun activities like dancing or sports",
                    "Aim for 150 minutes of moderate activity weekly",
                ]),
                strength: strings(&[
                    "Full-body strength training 3 days/week",
                    "Moderate weights with higher repetitions (12-15)",
                    "Include functional movements",
                    "Focus on form and mind-muscle connection",
                ]),
                flexibility: strings(&[
                    "Daily stretching routine",
                    "Yoga or Pilates 2-3 times per week",
                    "Include balance and stability exercises",
                ]),
            },
        ),
    ])
}

fn timeline_estimates() -> BTreeMap<FitnessGoal, TimelineEstimate> {
    BTreeMap::from([
        (
            FitnessGoal::WeightLoss,
            TimelineEstimate {
                safe_rate: "0.5-1 kg per week".to_owned(),
                typical_duration: "12-24 weeks for significant results".to_owned(),
                milestones: strings(&[
                    "Week 2-4: Initial water weight loss and increased energy",
                    "Week 4-8: Noticeable changes in body composition",
                    "Week 8-12: Significant weight loss and improved fitness",
                    "Week 12+: Continued progress with established habits",
                ]),
            },
        ),
        (
            FitnessGoal::WeightGain,
            TimelineEstimate {
                safe_rate: "0.25-0.5 kg per week".to_owned(),
                typical_duration: "16-32 weeks for significant results".to_owned(),
                milestones: strings(&[
                    "Week 2-4: Initial strength gains and appetite increase",
                    "Week 4-8: Noticeable muscle growth and weight gain",
                    "Week 8-16: Significant muscle development",
                    "Week 16+: Continued gains with refined nutrition",
                ]),
            },
        ),
        (
            FitnessGoal::LeanBody,
            TimelineEstimate {
                safe_rate: "Maintain weight while improving body composition".to_owned(),
                typical_duration: "8-16 weeks for visible results".to_owned(),
                milestones: strings(&[
                    "Week 2-4: Improved energy and workout performance",
                    "Week 4-8: Noticeable muscle tone and definition",
                    "Week 8-12: Significant body composition improvements",
                    "Week 12+: Maintained results with sustainable habits",
                ]),
            },
        ),
    ])
}

fn nutrients() -> Vec<NutrientReference> {
    vec![
        nutrient(
            "Protein",
            &["Lean meats", "Fish", "Eggs", "Legumes", "Greek yogurt", "Quinoa"],
            "Muscle building, repair, and maintenance",
            "1.6-2.2g per kg body weight for active individuals",
        ),
        nutrient(
            "Omega-3 Fatty Acids",
            &["Fatty fish", "Flaxseeds", "Chia seeds", "Walnuts", "Avocado"],
            "Heart health, brain function, inflammation reduction",
            "1-2 servings of fatty fish per week",
        ),
        nutrient(
            "Vitamin D",
            &["Sunlight", "Fatty fish", "Egg yolks", "Fortified dairy", "Mushrooms"],
            "Bone health, immune function, mood regulation",
            "15-20 minutes of sun exposure or 600-800 IU supplement",
        ),
        nutrient(
            "Iron",
            &["Red meat", "Spinach", "Legumes", "Pumpkin seeds", "Dark chocolate"],
            "Oxygen transport, energy production, immune function",
            "8-18mg depending on age and gender",
        ),
        nutrient(
            "Calcium",
            &["Dairy products", "Leafy greens", "Almonds", "Sardines", "Tofu"],
            "Bone health, muscle function, nerve transmission",
            "1000-1300mg depending on age",
        ),
        nutrient(
            "Vitamin B12",
            &["Animal products", "Fortified cereals", "Nutritional yeast"],
            "Energy production, nerve function, red blood cell formation",
            "2.4mcg for adults",
        ),
        nutrient(
            "Magnesium",
            &["Nuts and seeds", "Dark chocolate", "Leafy greens", "Whole grains"],
            "Muscle function, energy production, sleep quality",
            "310-420mg depending on age and gender",
        ),
        nutrient(
            "Zinc",
            &["Oysters", "Red meat", "Pumpkin seeds", "Legumes", "Nuts"],
            "Immune function, protein synthesis, wound healing",
            "8-11mg depending on age and gender",
        ),
    ]
}

fn health_tips() -> Vec<String> {
    strings(&[
        "Start your day with a healthy breakfast to boost metabolism",
        "Eat slowly and mindfully to improve digestion and satisfaction",
        "Include a variety of colorful fruits and vegetables daily",
        "Limit processed foods and added sugars",
        "Stay hydrated throughout the day",
        "Get regular health check-ups and screenings",
        "Manage stress through meditation, exercise, or hobbies",
        "Build a support network of friends and family",
        "Set realistic, achievable health goals",
        "Track your progress but don't obsess over daily fluctuations",
        "Listen to your body and rest when needed",
        "Celebrate small victories and progress milestones",
        "Focus on sustainable lifestyle changes, not quick fixes",
        "Get adequate sleep for recovery and overall health",
        "Include both cardio and strength training in your routine",
    ])
}
