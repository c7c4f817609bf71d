use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::projection::Projection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: i64,
    pub user_id: Option<Uuid>, // Owning user, if any
    pub day: String,           // Short weekday code, e.g. "Mon"
    pub calories: i32,
    pub duration: i32, // Minutes
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutSession {
    pub user_id: Option<Uuid>,
    pub day: String,
    pub calories: i32,
    pub duration: i32,
}

impl NewWorkoutSession {
    pub fn into_session(self, id: i64) -> WorkoutSession {
        WorkoutSession {
            id,
            user_id: self.user_id,
            day: self.day,
            calories: self.calories,
            duration: self.duration,
        }
    }
}

/// Dashboard point. The owning user is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDataResponse {
    pub day: String,
    pub calories: i32,
    pub duration: i32,
}

impl Projection for WorkoutSession {
    type Output = WorkoutDataResponse;

    const FIELDS: &'static [&'static str] = &["day", "calories", "duration"];

    fn project(self) -> WorkoutDataResponse {
        WorkoutDataResponse {
            day: self.day,
            calories: self.calories,
            duration: self.duration,
        }
    }
}
