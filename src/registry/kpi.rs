//! Term quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Enrollments | Sum of roster sizes |
//! | Fill Rate | enrolled / capacity, per course |
//! | Avg Credit Load | Mean credits carried per student |
//! | Avg Utilization | Mean occupied fraction of the 20-cell week |
//! | Unstaffed Courses | Courses no teacher has been assigned to |

use std::collections::{BTreeMap, HashSet};

use super::Term;
use crate::models::{CourseId, Timetabled};

/// Term performance indicators.
#[derive(Debug, Clone)]
pub struct TermKpi {
    /// Number of (student, course) enrollments.
    pub total_enrollments: usize,
    /// Per-course fill rate (0.0..1.0).
    pub fill_rate_by_course: BTreeMap<CourseId, f64>,
    /// Mean fill rate across courses.
    pub avg_fill_rate: f64,
    /// Mean credits per student.
    pub avg_credit_load: f64,
    /// Mean grid utilization across students.
    pub avg_student_utilization: f64,
    /// Mean grid utilization across teachers.
    pub avg_teacher_utilization: f64,
    /// Courses not held by any teacher, in id order.
    pub unstaffed_courses: Vec<CourseId>,
}

impl TermKpi {
    /// Computes KPIs from the current state of a term.
    pub fn calculate(term: &Term) -> Self {
        let fill_rate_by_course: BTreeMap<CourseId, f64> = term
            .courses()
            .filter_map(|c| c.fill_rate().map(|rate| (c.id, rate)))
            .collect();
        let total_enrollments = term.courses().map(|c| c.enrolled_count()).sum();

        let staffed: HashSet<CourseId> = term
            .teachers()
            .flat_map(|t| t.course_ids().iter().copied())
            .collect();
        let unstaffed_courses = term
            .courses()
            .map(|c| c.id)
            .filter(|id| !staffed.contains(id))
            .collect();

        Self {
            total_enrollments,
            avg_fill_rate: mean(fill_rate_by_course.values().copied()),
            fill_rate_by_course,
            avg_credit_load: mean(term.students().map(|s| s.total_credits() as f64)),
            avg_student_utilization: mean(term.students().map(|s| s.grid().utilization())),
            avg_teacher_utilization: mean(term.teachers().map(|t| t.grid().utilization())),
            unstaffed_courses,
        }
    }

    /// Whether every course is staffed and the mean fill rate reaches `min_fill_rate`.
    pub fn meets_thresholds(&self, min_fill_rate: f64) -> bool {
        self.unstaffed_courses.is_empty() && self.avg_fill_rate >= min_fill_rate
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
