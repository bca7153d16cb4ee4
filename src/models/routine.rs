use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Denormalized copy of a faculty member taken when the class was assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultySnapshot {
    pub name: String,
    pub designation: String,
    pub department: String,
}

/// Extra data carried by lab sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSession {
    pub fixed_time_range: String,
    pub second_faculty: FacultySnapshot,
}

impl LabSession {
    pub fn is_complete(&self) -> bool {
        !self.fixed_time_range.trim().is_empty() && !self.second_faculty.name.trim().is_empty()
    }
}

/// One scheduled class or lab session.
///
/// The backend stores these as flat JSON objects; `lab` is present exactly
/// when the record has `is_lab = true`, whether or not its lab fields are
/// filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoutineRecord", into = "RoutineRecord")]
pub struct RoutineEntry {
    pub id: String,
    pub day: String,
    pub time_range: String,
    pub room: String,
    pub section: String,
    pub course_code: String,
    pub course_title: String,
    pub batch: String,
    pub faculty: FacultySnapshot,
    pub lab: Option<LabSession>,
}

impl RoutineEntry {
    pub fn is_lab(&self) -> bool {
        self.lab.is_some()
    }

    /// Both faculty names, skipping a missing second one.
    pub fn faculty_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.faculty.name.as_str())
            .chain(self.lab.as_ref().map(|lab| lab.second_faculty.name.as_str()))
    }
}

/// Flat wire shape shared with the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutineRecord {
    #[serde(
        rename = "_id",
        alias = "id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "super::null_as_default"
    )]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub day: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub time_range: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub room: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub section: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub course_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub course_title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub faculty_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub faculty_designation: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub faculty_department: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub batch: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_lab: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lab_fixed_time_range: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub faculty_name_2: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub faculty_designation_2: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub faculty_department_2: String,
}

impl From<RoutineRecord> for RoutineEntry {
    fn from(r: RoutineRecord) -> Self {
        let lab = r.is_lab.then(|| LabSession {
            fixed_time_range: r.lab_fixed_time_range,
            second_faculty: FacultySnapshot {
                name: r.faculty_name_2,
                designation: r.faculty_designation_2,
                department: r.faculty_department_2,
            },
        });

        Self {
            id: r.id,
            day: r.day,
            time_range: r.time_range,
            room: r.room,
            section: r.section,
            course_code: r.course_code,
            course_title: r.course_title,
            batch: r.batch,
            faculty: FacultySnapshot {
                name: r.faculty_name,
                designation: r.faculty_designation,
                department: r.faculty_department,
            },
            lab,
        }
    }
}

impl From<RoutineEntry> for RoutineRecord {
    fn from(e: RoutineEntry) -> Self {
        let is_lab = e.lab.is_some();
        let lab = e.lab.unwrap_or_default();

        Self {
            id: e.id,
            day: e.day,
            time_range: e.time_range,
            room: e.room,
            section: e.section,
            course_code: e.course_code,
            course_title: e.course_title,
            faculty_name: e.faculty.name,
            faculty_designation: e.faculty.designation,
            faculty_department: e.faculty.department,
            batch: e.batch,
            is_lab,
            lab_fixed_time_range: lab.fixed_time_range,
            faculty_name_2: lab.second_faculty.name,
            faculty_designation_2: lab.second_faculty.designation,
            faculty_department_2: lab.second_faculty.department,
        }
    }
}

/// Form state for creating or editing a routine entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutineDraft {
    pub day: String,
    pub time_range: String,
    pub room: String,
    pub section: String,
    pub course_code: String,
    pub course_title: String,
    pub faculty_name: String,
    pub faculty_designation: String,
    pub faculty_department: String,
    pub batch: String,
    pub is_lab: bool,
    pub lab_fixed_time_range: String,
    pub faculty_name_2: String,
    pub faculty_designation_2: String,
    pub faculty_department_2: String,
}

impl RoutineDraft {
    /// Checks the draft before it is sent to the backend.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("day", &self.day),
            ("time_range", &self.time_range),
            ("room", &self.room),
            ("section", &self.section),
            ("course_code", &self.course_code),
            ("course_title", &self.course_title),
            ("faculty_name", &self.faculty_name),
            ("faculty_designation", &self.faculty_designation),
            ("faculty_department", &self.faculty_department),
            ("batch", &self.batch),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "Please fill in the \"{}\" field.",
                field.replacen('_', " ", 1)
            )));
        }

        if self.is_lab {
            if self.lab_fixed_time_range.trim().is_empty() {
                return Err(AppError::Validation(
                    "Please specify lab fixed time range.".to_string(),
                ));
            }
            if self.faculty_name_2.trim().is_empty() {
                return Err(AppError::Validation(
                    "Please select Faculty B for lab course.".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl From<&RoutineEntry> for RoutineDraft {
    fn from(entry: &RoutineEntry) -> Self {
        let r = RoutineRecord::from(entry.clone());
        Self {
            day: r.day,
            time_range: r.time_range,
            room: r.room,
            section: r.section,
            course_code: r.course_code,
            course_title: r.course_title,
            faculty_name: r.faculty_name,
            faculty_designation: r.faculty_designation,
            faculty_department: r.faculty_department,
            batch: r.batch,
            is_lab: r.is_lab,
            lab_fixed_time_range: r.lab_fixed_time_range,
            faculty_name_2: r.faculty_name_2,
            faculty_designation_2: r.faculty_designation_2,
            faculty_department_2: r.faculty_department_2,
        }
    }
}
