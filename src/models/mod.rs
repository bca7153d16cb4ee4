pub mod course;
pub mod faculty;
pub mod routine;
pub mod settings;

pub use course::{Course, CourseKind};
pub use faculty::{Faculty, FacultyType};
pub use routine::{FacultySnapshot, LabSession, RoutineDraft, RoutineEntry};
pub use settings::{Semester, Settings, SettingsScope};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON number, a numeric string, or null/blank.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}
