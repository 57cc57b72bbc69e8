//! Term catalog.
//!
//! Owns every course, student, and teacher of one term, keyed by id, and
//! routes assignment and enrollment requests to the policies with
//! exclusive access to exactly the two records involved.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::SchedulingConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Course, CourseId, Student, StudentId, Teacher, TeacherId};
use crate::policy::{AssignmentPolicy, EnrollmentPolicy};
use crate::validation::validate_course;

/// All scheduling records of one term.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, Day, Slot, Student, Teacher};
/// use u_timetable::registry::Term;
///
/// let mut term = Term::default();
/// term.add_course(
///     Course::new(3, "Programming")
///         .with_major("Computer")
///         .with_credits(4)
///         .with_capacity(10)
///         .with_meeting((Day::Monday, Slot::S14To16)),
/// ).unwrap();
/// term.add_teacher(Teacher::new(102, "Ms. Mohammadi", "Computer")).unwrap();
/// term.add_student(Student::new(1, "Ali", "Computer")).unwrap();
///
/// term.assign(102, 3).unwrap();
/// term.enroll(1, 3).unwrap();
/// assert_eq!(term.student(1).unwrap().total_credits(), 4);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Term {
    enrollment: EnrollmentPolicy,
    assignment: AssignmentPolicy,
    courses: BTreeMap<CourseId, Course>,
    students: BTreeMap<StudentId, Student>,
    teachers: BTreeMap<TeacherId, Teacher>,
}

impl Term {
    /// Creates an empty term governed by `config`.
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            enrollment: EnrollmentPolicy::new(config),
            ..Self::default()
        }
    }

    /// Registers a course.
    ///
    /// Rejects duplicate ids and courses that fail [`validate_course`].
    pub fn add_course(&mut self, course: Course) -> ScheduleResult<()> {
        if self.courses.contains_key(&course.id) {
            return Err(ScheduleError::DuplicateId {
                entity: "course",
                id: course.id,
            });
        }
        if let Err(errors) = validate_course(&course) {
            let reason = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ScheduleError::InvalidCourse {
                course_id: course.id,
                reason,
            });
        }

        debug!(
            course_id = course.id,
            name = %course.name,
            capacity = course.capacity,
            "course registered"
        );
        self.courses.insert(course.id, course);
        Ok(())
    }

    /// Registers a student.
    pub fn add_student(&mut self, student: Student) -> ScheduleResult<()> {
        if self.students.contains_key(&student.id) {
            return Err(ScheduleError::DuplicateId {
                entity: "student",
                id: student.id,
            });
        }
        self.students.insert(student.id, student);
        Ok(())
    }

    /// Registers a teacher.
    pub fn add_teacher(&mut self, teacher: Teacher) -> ScheduleResult<()> {
        if self.teachers.contains_key(&teacher.id) {
            return Err(ScheduleError::DuplicateId {
                entity: "teacher",
                id: teacher.id,
            });
        }
        self.teachers.insert(teacher.id, teacher);
        Ok(())
    }

    /// Binds a teacher to a course.
    pub fn assign(&mut self, teacher_id: TeacherId, course_id: CourseId) -> ScheduleResult<()> {
        let course = self
            .courses
            .get(&course_id)
            .ok_or(ScheduleError::UnknownCourse(course_id))?;
        let teacher = self
            .teachers
            .get_mut(&teacher_id)
            .ok_or(ScheduleError::UnknownTeacher(teacher_id))?;
        self.assignment.assign(teacher, course)
    }

    /// Releases a teacher from a course.
    pub fn unassign(&mut self, teacher_id: TeacherId, course_id: CourseId) -> ScheduleResult<()> {
        let course = self
            .courses
            .get(&course_id)
            .ok_or(ScheduleError::UnknownCourse(course_id))?;
        let teacher = self
            .teachers
            .get_mut(&teacher_id)
            .ok_or(ScheduleError::UnknownTeacher(teacher_id))?;
        self.assignment.unassign(teacher, course)
    }

    /// Enrolls a student in a course.
    pub fn enroll(&mut self, student_id: StudentId, course_id: CourseId) -> ScheduleResult<()> {
        let course = self
            .courses
            .get_mut(&course_id)
            .ok_or(ScheduleError::UnknownCourse(course_id))?;
        let student = self
            .students
            .get_mut(&student_id)
            .ok_or(ScheduleError::UnknownStudent(student_id))?;
        self.enrollment.enroll(student, course)
    }

    /// Withdraws a student from a course.
    pub fn withdraw(&mut self, student_id: StudentId, course_id: CourseId) -> ScheduleResult<()> {
        let course = self
            .courses
            .get_mut(&course_id)
            .ok_or(ScheduleError::UnknownCourse(course_id))?;
        let student = self
            .students
            .get_mut(&student_id)
            .ok_or(ScheduleError::UnknownStudent(student_id))?;
        self.enrollment.withdraw(student, course)
    }

    /// Looks up a course.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    /// Looks up a student.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Looks up a teacher.
    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.get(&id)
    }

    /// Courses in id order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Students in id order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Teachers in id order.
    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> {
        self.teachers.values()
    }

    /// The enrollment policy in force.
    pub fn enrollment_policy(&self) -> &EnrollmentPolicy {
        &self.enrollment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Day, Meeting, Slot, Timetabled};

    fn sample_term() -> Term {
        let mut term = Term::default();
        term.add_course(
            Course::new(1, "Math 1")
                .with_major("Math")
                .with_teacher(101)
                .with_credits(3)
                .with_capacity(10)
                .with_meeting((Day::Saturday, Slot::S08To10)),
        )
        .unwrap();
        term.add_student(Student::new(2, "Maryam", "Math")).unwrap();
        term.add_teacher(Teacher::new(101, "Mr. Rezaei", "Math"))
            .unwrap();
        term
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut term = sample_term();
        let err = term
            .add_course(
                Course::new(1, "Again")
                    .with_credits(1)
                    .with_capacity(1)
                    .with_meeting(Meeting::raw(0, 1)),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::DuplicateId {
                entity: "course",
                id: 1
            }
        );
        assert!(term.add_student(Student::new(2, "X", "Math")).is_err());
        assert!(term.add_teacher(Teacher::new(101, "Y", "Math")).is_err());
    }

    #[test]
    fn test_invalid_course_rejected() {
        let mut term = Term::default();
        let err = term
            .add_course(
                Course::new(9, "Bad")
                    .with_credits(1)
                    .with_capacity(1)
                    .with_meeting(Meeting::raw(5, 0)),
            )
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidCourse { course_id: 9, .. }));
        assert!(term.course(9).is_none());
    }

    #[test]
    fn test_unknown_records() {
        let mut term = sample_term();
        assert_eq!(term.enroll(99, 1), Err(ScheduleError::UnknownStudent(99)));
        assert_eq!(term.enroll(2, 99), Err(ScheduleError::UnknownCourse(99)));
        assert_eq!(term.assign(7, 1), Err(ScheduleError::UnknownTeacher(7)));
        assert_eq!(term.withdraw(2, 1).unwrap_err().kind(), ErrorKind::Registry);
    }

    #[test]
    fn test_enroll_and_assign_through_term() {
        let mut term = sample_term();
        term.assign(101, 1).unwrap();
        term.enroll(2, 1).unwrap();

        assert_eq!(term.course(1).unwrap().enrolled_ids(), &[2]);
        assert_eq!(term.student(2).unwrap().course_ids(), &[1]);
        assert_eq!(term.teacher(101).unwrap().course_ids(), &[1]);

        term.withdraw(2, 1).unwrap();
        term.unassign(101, 1).unwrap();
        assert!(term.course(1).unwrap().enrolled_ids().is_empty());
        assert!(term.teacher(101).unwrap().grid().is_empty());
    }

    #[test]
    fn test_configured_ceiling_applies() {
        let mut term = Term::new(&SchedulingConfig::default().with_max_credits(2));
        term.add_course(
            Course::new(1, "Math 1")
                .with_major("Math")
                .with_credits(3)
                .with_capacity(10)
                .with_meeting((Day::Saturday, Slot::S08To10)),
        )
        .unwrap();
        term.add_student(Student::new(2, "Maryam", "Math")).unwrap();

        let err = term.enroll(2, 1).unwrap_err();
        assert!(err.is_policy_violation());
        assert_eq!(term.enrollment_policy().max_credits(), 2);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut term = sample_term();
        term.assign(101, 1).unwrap();
        term.enroll(2, 1).unwrap();

        let json = serde_json::to_string(&term).unwrap();
        let restored: Term = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.student(2), term.student(2));
        assert_eq!(restored.course(1), term.course(1));
        assert_eq!(
            restored.teacher(101).unwrap().grid().occupant(0, 0),
            Some("Math 1")
        );
    }
}
