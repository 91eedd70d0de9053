mod controls;
mod day;

pub use controls::WorkoutControls;
pub use day::WorkoutDayCard;
