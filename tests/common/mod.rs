#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use routine_board::client::RoutineApi;
use routine_board::error::AppError;
use routine_board::models::{
    Course, Faculty, FacultySnapshot, RoutineDraft, RoutineEntry, Semester, Settings,
    SettingsScope,
};
use routine_board::routine::RoutineFilter;

pub fn entry(day: &str, time_range: &str, room: &str, batch: &str) -> RoutineEntry {
    RoutineEntry {
        id: format!("{}-{}-{}-{}", day, time_range, room, batch),
        day: day.to_string(),
        time_range: time_range.to_string(),
        room: room.to_string(),
        section: "A".to_string(),
        course_code: "ICE-1101".to_string(),
        course_title: "Programming Fundamentals".to_string(),
        batch: batch.to_string(),
        faculty: FacultySnapshot {
            name: "Kabir Hossain".to_string(),
            designation: "Lecturer".to_string(),
            department: "ICE".to_string(),
        },
        lab: None,
    }
}

pub fn settings() -> Settings {
    Settings {
        time_ranges: vec![
            "10:15-11:45".to_string(),
            "08:30-10:00".to_string(),
            "13:30-15:00".to_string(),
        ],
        classrooms: vec!["301".to_string(), "302".to_string(), "Lab-1".to_string()],
        sections: vec!["A".to_string(), "B".to_string()],
        batches: vec!["X".to_string(), "Y".to_string()],
        university_name: "Noakhali Science and Technology University".to_string(),
        department_name: "ICE".to_string(),
        ..Default::default()
    }
}

pub fn valid_draft() -> RoutineDraft {
    RoutineDraft {
        day: "Monday".to_string(),
        time_range: "08:30-10:00".to_string(),
        room: "301".to_string(),
        section: "A".to_string(),
        course_code: "ICE-2101".to_string(),
        course_title: "Data Structures".to_string(),
        faculty_name: "Kabir Hossain".to_string(),
        faculty_designation: "Lecturer".to_string(),
        faculty_department: "ICE".to_string(),
        batch: "X".to_string(),
        ..Default::default()
    }
}

/// In-memory backend. Filters the way the real `/routines` endpoint does.
#[derive(Default)]
pub struct StubApi {
    pub routines: Vec<RoutineEntry>,
    pub settings: Settings,
    pub faculties: Vec<Faculty>,
    pub courses: Vec<Course>,
    pub conflict: Option<String>,
    pub calls: Mutex<Vec<String>>,
    /// Settings as changed by admin writes; `settings` until the first one.
    pub saved_settings: Mutex<Option<Settings>>,
}

impl StubApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn current_settings(&self) -> Settings {
        self.saved_settings
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| self.settings.clone())
    }

    fn edit_settings(&self, edit: impl FnOnce(&mut Settings)) {
        let mut settings = self.current_settings();
        edit(&mut settings);
        *self.saved_settings.lock().unwrap() = Some(settings);
    }
}

#[async_trait]
impl RoutineApi for StubApi {
    async fn fetch_routines(&self, filter: &RoutineFilter) -> Result<Vec<RoutineEntry>, AppError> {
        self.record("fetch_routines");
        Ok(filter.apply(&self.routines))
    }

    async fn fetch_settings(&self, _scope: SettingsScope) -> Result<Settings, AppError> {
        self.record("fetch_settings");
        Ok(self.current_settings())
    }

    async fn fetch_faculties(&self) -> Result<Vec<Faculty>, AppError> {
        self.record("fetch_faculties");
        Ok(self.faculties.clone())
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        self.record("fetch_courses");
        Ok(self.courses.clone())
    }

    async fn check_conflict(
        &self,
        _draft: &RoutineDraft,
        current_id: Option<&str>,
    ) -> Result<(), AppError> {
        self.record(format!("check_conflict:{}", current_id.unwrap_or_default()));
        match &self.conflict {
            Some(message) => Err(AppError::Conflict(message.clone())),
            None => Ok(()),
        }
    }

    async fn create_routine(&self, draft: &RoutineDraft) -> Result<(), AppError> {
        self.record(format!("create:{}", draft.course_code));
        Ok(())
    }

    async fn update_routine(&self, id: &str, _draft: &RoutineDraft) -> Result<(), AppError> {
        self.record(format!("update:{}", id));
        Ok(())
    }

    async fn delete_routine(&self, id: &str) -> Result<(), AppError> {
        self.record(format!("delete:{}", id));
        Ok(())
    }

    async fn clear_routines(&self) -> Result<(), AppError> {
        self.record("clear");
        Ok(())
    }

    async fn save_course(&self, id: Option<&str>, course: &Course) -> Result<(), AppError> {
        self.record(format!(
            "save_course:{}:{}",
            id.unwrap_or("new"),
            course.course_code
        ));
        Ok(())
    }

    async fn delete_course(&self, id: &str) -> Result<(), AppError> {
        self.record(format!("delete_course:{}", id));
        Ok(())
    }

    async fn save_faculty(&self, id: Option<&str>, faculty: &Faculty) -> Result<(), AppError> {
        self.record(format!("save_faculty:{}:{}", id.unwrap_or("new"), faculty.name));
        Ok(())
    }

    async fn delete_faculty(&self, id: &str) -> Result<(), AppError> {
        self.record(format!("delete_faculty:{}", id));
        Ok(())
    }

    async fn update_semester(&self, semester: &Semester) -> Result<(), AppError> {
        self.record("update_semester");
        let semester = semester.clone();
        self.edit_settings(|s| s.semester = Some(semester));
        Ok(())
    }

    async fn add_time_range(&self, time_range: &str) -> Result<(), AppError> {
        self.record(format!("add_time_range:{}", time_range));
        self.edit_settings(|s| s.time_ranges.push(time_range.to_string()));
        Ok(())
    }
}
