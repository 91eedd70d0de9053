#![allow(dead_code)]

use stepwise::WorkoutPlan;

/// day1: warmup[jacks, circles] + main[squats], day2: main[pushups, dips], day3: main[lunges].
pub const PLAN: &str = r#"{
    "title": "Integration plan",
    "days": [
        {"key": "day1", "title": "Day 1", "sections": [
            {"key": "warmup", "title": "Warm-up", "exercises": [
                {"key": "jacks", "title": "Jumping Jacks"},
                {"key": "circles", "title": "Hip Circles"}
            ]},
            {"key": "main", "title": "Main", "exercises": [
                {"key": "squats", "title": "Squats", "subActivities": [
                    {"id": "set1", "description": "Set 1"},
                    {"id": "set2", "description": "Set 2"}
                ]}
            ]}
        ]},
        {"key": "day2", "title": "Day 2", "sections": [
            {"key": "main", "title": "Main", "exercises": [
                {"key": "pushups", "title": "Push-ups"},
                {"key": "dips", "title": "Dips"}
            ]}
        ]},
        {"key": "day3", "title": "Day 3", "sections": [
            {"key": "main", "title": "Main", "exercises": [
                {"key": "lunges", "title": "Lunges"}
            ]}
        ]}
    ]
}"#;

pub fn plan() -> WorkoutPlan {
    WorkoutPlan::from_json(PLAN).unwrap()
}

pub const DAY1: [(&str, &str); 3] = [("warmup", "jacks"), ("warmup", "circles"), ("main", "squats")];
pub const DAY2: [(&str, &str); 2] = [("main", "pushups"), ("main", "dips")];
