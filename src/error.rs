use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("localStorage is not available")]
    StorageUnavailable,

    #[error("stored value under `{key}` is not valid JSON: {source}")]
    MalformedState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse workout plan: {0}")]
    ContentParse(#[source] serde_json::Error),

    #[error("invalid workout plan: {0}")]
    InvalidContent(String),

    #[error("unknown day `{0}`")]
    UnknownDay(String),

    #[error("day `{day}` has no exercise `{exercise}`")]
    UnknownExercise { day: String, exercise: String },

    #[error("exercise `{exercise}` has no sub-activity `{sub_activity}`")]
    UnknownSubActivity {
        exercise: String,
        sub_activity: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
