//! End-to-end term scenarios through the public API.

use u_timetable::config::SchedulingConfig;
use u_timetable::models::{Course, Day, Meeting, Slot, Student, Teacher, Timetabled, WeeklyGrid};
use u_timetable::policy::{AssignmentPolicy, EnrollmentPolicy};
use u_timetable::registry::{Term, TermKpi};
use u_timetable::reservation::Reservation;
use u_timetable::{ErrorKind, ScheduleError};

/// Three courses, two students, two teachers.
fn demo_term() -> Term {
    let mut term = Term::new(&SchedulingConfig::default());
    term.add_course(
        Course::new(1, "Math 1")
            .with_major("Math")
            .with_teacher(101)
            .with_credits(3)
            .with_capacity(10)
            .with_meeting((Day::Saturday, Slot::S08To10)),
    )
    .unwrap();
    term.add_course(
        Course::new(2, "Physics 1")
            .with_major("Physics")
            .with_teacher(102)
            .with_credits(4)
            .with_capacity(10)
            .with_meeting((Day::Sunday, Slot::S10To12)),
    )
    .unwrap();
    term.add_course(
        Course::new(3, "Programming")
            .with_major("Computer")
            .with_teacher(103)
            .with_credits(4)
            .with_capacity(10)
            .with_meeting((Day::Monday, Slot::S14To16)),
    )
    .unwrap();

    term.add_student(Student::new(1, "Ali", "Computer")).unwrap();
    term.add_student(Student::new(2, "Maryam", "Math")).unwrap();
    term.add_teacher(Teacher::new(101, "Mr. Rezaei", "Math"))
        .unwrap();
    term.add_teacher(Teacher::new(102, "Ms. Mohammadi", "Computer"))
        .unwrap();
    term
}

#[test]
fn demo_term_schedules_cleanly() {
    let mut term = demo_term();

    term.assign(101, 1).unwrap();
    term.assign(102, 3).unwrap();
    term.enroll(1, 3).unwrap();
    term.enroll(2, 1).unwrap();

    let ali = term.student(1).unwrap();
    assert_eq!(ali.total_credits(), 4);
    assert_eq!(ali.grid().occupant(2, 2), Some("Programming"));

    let maryam = term.student(2).unwrap();
    assert_eq!(maryam.grid().occupant(0, 0), Some("Math 1"));

    let kpi = TermKpi::calculate(&term);
    assert_eq!(kpi.total_enrollments, 2);
    assert_eq!(kpi.unstaffed_courses, vec![2]);

    let rendered = term.teacher(102).unwrap().grid().to_string();
    assert!(rendered.contains("14-16: Programming"));
}

#[test]
fn fresh_grid_is_all_free() {
    let g = WeeklyGrid::new();
    for day in Day::all() {
        for slot in Slot::all() {
            assert!(g.is_available(day.index(), slot.index()));
        }
    }
}

#[test]
fn reserve_unreserve_round_trip() {
    let mut g = WeeklyGrid::new();
    for day in Day::all() {
        for slot in Slot::all() {
            let (d, s) = (day.index(), slot.index());
            assert!(g.reserve(d, s, "A"));
            assert!(!g.is_available(d, s));
            assert!(!g.reserve(d, s, "B"));
            assert_eq!(g.occupant(d, s), Some("A"));
            assert!(g.unreserve(d, s));
            assert!(g.is_available(d, s));
            assert!(!g.unreserve(d, s));
        }
    }
    assert_eq!(g, WeeklyGrid::new());
}

#[test]
fn failed_multi_slot_reservation_touches_nothing() {
    let mut g = WeeklyGrid::new();
    assert!(g.reserve(1, 3, "Other"));

    let meetings = [Meeting::raw(0, 2), Meeting::raw(1, 3)];
    let err = Reservation::new("Ali", "Course", &meetings)
        .commit(&mut g)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(g.is_available(0, 2));
    assert_eq!(g.occupied_count(), 1);
}

#[test]
fn enrollment_scenarios() {
    let policy = EnrollmentPolicy::default();
    let mut course = Course::new(3, "Programming")
        .with_major("Computer")
        .with_credits(4)
        .with_capacity(10)
        .with_meeting((Day::Monday, Slot::S14To16));

    let mut ali = Student::new(1, "Ali", "Computer");
    assert!(policy.enroll(&mut ali, &mut course).is_ok());
    assert_eq!(ali.total_credits(), 4);
    assert_eq!(course.enrolled_ids().iter().filter(|&&id| id == 1).count(), 1);

    let mut maryam = Student::new(2, "Maryam", "Math");
    let err = policy.enroll(&mut maryam, &mut course).unwrap_err();
    assert!(matches!(err, ScheduleError::MajorMismatch { .. }));
    assert!(maryam.course_ids().is_empty());
    assert_eq!(course.enrolled_ids(), &[1]);
}

#[test]
fn capacity_one_admits_one() {
    let policy = EnrollmentPolicy::default();
    let mut course = Course::new(5, "Seminar")
        .with_major("Computer")
        .with_credits(2)
        .with_capacity(1)
        .with_meeting((Day::Wednesday, Slot::S16To18));

    let mut first = Student::new(1, "Ali", "Computer");
    let mut second = Student::new(2, "Sara", "Computer");
    policy.enroll(&mut first, &mut course).unwrap();

    let err = policy.enroll(&mut second, &mut course).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PolicyViolation);
    assert_eq!(course.enrolled_count(), 1);
}

#[test]
fn credit_ceiling_boundary() {
    let mut term = Term::default();
    let filler = [(10, 6, Day::Saturday), (11, 6, Day::Sunday), (12, 5, Day::Monday)];
    for (id, credits, day) in filler {
        term.add_course(
            Course::new(id, format!("Filler {id}"))
                .with_major("Computer")
                .with_credits(credits)
                .with_capacity(5)
                .with_meeting((day, Slot::S08To10)),
        )
        .unwrap();
    }
    term.add_course(
        Course::new(20, "Three")
            .with_major("Computer")
            .with_credits(3)
            .with_capacity(5)
            .with_meeting((Day::Tuesday, Slot::S08To10)),
    )
    .unwrap();
    term.add_course(
        Course::new(21, "Four")
            .with_major("Computer")
            .with_credits(4)
            .with_capacity(5)
            .with_meeting((Day::Tuesday, Slot::S10To12)),
    )
    .unwrap();
    term.add_student(Student::new(1, "Ali", "Computer")).unwrap();
    term.add_student(Student::new(2, "Reza", "Computer")).unwrap();

    for id in [10, 11, 12] {
        term.enroll(1, id).unwrap();
        term.enroll(2, id).unwrap();
    }
    assert_eq!(term.student(1).unwrap().total_credits(), 17);

    term.enroll(1, 20).unwrap();
    assert_eq!(term.student(1).unwrap().total_credits(), 20);

    let err = term.enroll(2, 21).unwrap_err();
    assert!(matches!(err, ScheduleError::CreditLimitExceeded { requested: 21, .. }));
    assert_eq!(term.student(2).unwrap().total_credits(), 17);
}

#[test]
fn teacher_double_assignment_rejected() {
    let policy = AssignmentPolicy::new();
    let mut teacher = Teacher::new(101, "Mr. Rezaei", "Math");
    let first = Course::new(1, "Math 1").with_meeting((Day::Saturday, Slot::S08To10));
    let second = Course::new(2, "Math 2")
        .with_meeting((Day::Sunday, Slot::S08To10))
        .with_meeting((Day::Saturday, Slot::S08To10));

    policy.assign(&mut teacher, &first).unwrap();
    let err = policy.assign(&mut teacher, &second).unwrap_err();

    assert!(matches!(
        err,
        ScheduleError::Conflict {
            day: Day::Saturday,
            slot: Slot::S08To10,
            ..
        }
    ));
    assert_eq!(teacher.course_ids(), &[1]);
    assert!(teacher.grid().is_available(1, 0));
}

#[test]
fn config_from_toml_drives_term() {
    let config = SchedulingConfig::from_toml_str("max_credits = 3").unwrap();
    let mut term = demo_term();
    let mut strict = Term::new(&config);
    for course in term.courses() {
        strict.add_course(course.clone()).unwrap();
    }
    strict.add_student(Student::new(1, "Ali", "Computer")).unwrap();

    assert_eq!(strict.enroll(1, 3).unwrap_err().kind(), ErrorKind::PolicyViolation);
    assert!(term.enroll(1, 3).is_ok());
}

#[test]
fn course_meetings_stay_in_step_with_grids() {
    let mut term = demo_term();
    term.assign(102, 3).unwrap();
    term.enroll(1, 3).unwrap();

    let course = term.course(3).unwrap();
    assert_eq!(course.credits(), 4);
    assert_eq!(course.capacity(), 10);
    let meetings = course.meetings().to_vec();
    for m in &meetings {
        assert_eq!(term.student(1).unwrap().grid().occupant(m.day, m.slot), Some("Programming"));
    }

    term.withdraw(1, 3).unwrap();
    term.unassign(102, 3).unwrap();
    for m in &meetings {
        assert!(term.student(1).unwrap().grid().is_available(m.day, m.slot));
        assert!(term.teacher(102).unwrap().grid().is_available(m.day, m.slot));
    }
}
