use rtimesheet::core::editor::{DayEditor, EMPTY_DETAILS};
use rtimesheet::core::routes::View;
use rtimesheet::errors::AppError;
use rtimesheet::models::HOURS_PER_DAY;
use rtimesheet::models::day_status::DayStatus;

mod common;
use common::{FakeApi, d, employee_session, full_day};

#[test]
fn save_is_enabled_only_when_all_hours_are_complete() {
    let api = FakeApi::new();
    let session = employee_session();
    let mut editor = DayEditor::new(&api, &session, d(2026, 10, 14));

    for hour in 1..=HOURS_PER_DAY {
        assert!(!editor.can_save());
        editor.select_project(hour, Some(1)).unwrap();
        assert!(!editor.can_save(), "project alone is not enough");
        editor.select_task(hour, 11).unwrap();
    }
    assert!(editor.can_save());
    assert_eq!(editor.completion(), 1.0);

    editor.select_project(5, None).unwrap();
    assert!(!editor.can_save());
    assert_eq!(editor.completed_hours(), 7);
}

#[test]
fn selecting_a_project_clears_the_task() {
    let api = FakeApi::new();
    let session = employee_session();
    let mut editor = DayEditor::new(&api, &session, d(2026, 10, 14));

    editor.select_project(2, Some(1)).unwrap();
    editor.select_task(2, 12).unwrap();
    assert_eq!(editor.entry(2).unwrap().task, Some(12));

    // same project again still resets the task
    editor.select_project(2, Some(1)).unwrap();
    assert_eq!(editor.entry(2).unwrap().task, None);

    editor.select_task(2, 12).unwrap();
    editor.select_project(2, Some(2)).unwrap();
    let entry = editor.entry(2).unwrap();
    assert_eq!(entry.task, None);
    assert!(entry.task_options.iter().all(|t| t.project_id == 2));
}

#[test]
fn task_must_belong_to_the_hour_project() {
    let api = FakeApi::new();
    let session = employee_session();
    let mut editor = DayEditor::new(&api, &session, d(2026, 10, 14));

    assert!(matches!(
        editor.select_task(1, 11),
        Err(AppError::InvalidTask(_))
    ));

    editor.select_project(1, Some(2)).unwrap();
    assert!(matches!(
        editor.select_task(1, 11),
        Err(AppError::InvalidTask(_))
    ));
    assert!(matches!(
        editor.select_project(9, Some(1)),
        Err(AppError::InvalidHour(9))
    ));
}

#[test]
fn task_lists_are_fetched_once_per_project() {
    let api = FakeApi::new();
    let session = employee_session();
    let mut editor = DayEditor::new(&api, &session, d(2026, 10, 14));

    for hour in 1..=HOURS_PER_DAY {
        editor.select_project(hour, Some(1)).unwrap();
    }
    editor.select_project(3, Some(2)).unwrap();
    editor.select_project(3, Some(1)).unwrap();
    editor.project_tasks(2).unwrap();

    assert_eq!(api.task_calls_for(1), 1);
    assert_eq!(api.task_calls_for(2), 1);
    assert_eq!(editor.cache().len(), 2);
}

#[test]
fn failed_task_fetch_is_recoverable() {
    let api = FakeApi::new();
    api.failing_tasks.borrow_mut().insert(2);
    let session = employee_session();
    let mut editor = DayEditor::new(&api, &session, d(2026, 10, 14));

    editor.select_project(1, Some(2)).unwrap();
    let entry = editor.entry(1).unwrap();
    assert_eq!(entry.project, Some(2));
    assert!(entry.task_options.is_empty());

    let notes = editor.take_notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert_eq!(notes[0].message, "Failed to fetch tasks for selected project");

    // not cached: the next selection retries
    api.failing_tasks.borrow_mut().clear();
    editor.select_project(1, Some(2)).unwrap();
    assert_eq!(api.task_calls_for(2), 2);
    editor.select_task(1, 21).unwrap();
}

#[test]
fn bulk_assign_needs_project_and_task() {
    let api = FakeApi::new();
    let session = employee_session();
    let mut editor = DayEditor::new(&api, &session, d(2026, 10, 14));
    editor.select_project(4, Some(2)).unwrap();
    editor.select_task(4, 22).unwrap();
    let before = editor.entries().to_vec();

    assert!(!editor.bulk_assign(Some(1), None, "x"));
    assert!(!editor.bulk_assign(None, Some(11), "x"));
    assert!(!editor.bulk_assign(None, None, ""));
    assert_eq!(editor.entries(), before.as_slice());
    assert!(editor.notifications().is_empty());

    editor.project_tasks(1).unwrap();
    assert!(editor.bulk_assign(Some(1), Some(12), "Sprint"));
    assert!(editor.can_save());
    assert!(editor.entries().iter().all(|e| e.project == Some(1)
        && e.task == Some(12)
        && e.details == "Sprint"
        && e.task_name() == Some("Review")));
    assert_eq!(
        editor.notifications()[0].message,
        "Tasks bulk assigned successfully!"
    );
}

#[test]
fn save_sends_eight_hours_with_placeholder_details() {
    let api = FakeApi::new();
    let session = employee_session();
    let day = d(2026, 10, 14);
    let mut editor = DayEditor::new(&api, &session, day);

    assert!(matches!(editor.save(), Err(AppError::IncompleteDay(8))));
    assert!(api.saved.borrow().is_empty());

    editor.project_tasks(1).unwrap();
    editor.bulk_assign(Some(1), Some(11), "");
    editor.set_details(3, "workshop").unwrap();

    assert_eq!(editor.save().unwrap(), View::TimeSheet);

    let saved = api.saved.borrow();
    let entries = &saved[0];
    assert_eq!(entries.len(), HOURS_PER_DAY);
    assert!(entries.iter().all(|e| e.day == day && e.task_id == 11));
    assert_eq!(entries[0].details, EMPTY_DETAILS);
    assert_eq!(entries[2].details, "workshop");
    assert_eq!(
        editor.notifications().last().unwrap().message,
        "Day's tasks saved successfully!"
    );
}

#[test]
fn failed_save_leaves_the_form_intact() {
    let api = FakeApi::new();
    api.fail_save.set(true);
    let session = employee_session();
    let mut editor = DayEditor::new(&api, &session, d(2026, 10, 14));
    editor.project_tasks(2).unwrap();
    editor.bulk_assign(Some(2), Some(21), "on call");
    let before = editor.entries().to_vec();

    let err = editor.save().unwrap_err();
    assert_eq!(err.to_string(), "Failed to save day tasks");
    assert_eq!(editor.entries(), before.as_slice());
    assert!(editor.can_save());
}

#[test]
fn opening_an_existing_day_prefills_rows() {
    let day = d(2026, 10, 13);
    let api = FakeApi::new().with_days(vec![full_day(day, DayStatus::Rejected, 2, 22)]);
    let session = employee_session();

    let mut editor = DayEditor::open(&api, &session, day).unwrap();
    assert!(editor.is_editing());
    assert_eq!(editor.existing_status(), Some(DayStatus::Rejected));
    assert!(editor.can_save());
    assert_eq!(editor.entry(1).unwrap().details, "hour 1");
    assert_eq!(editor.entry(8).unwrap().task_name(), Some("Meetings"));
    assert_eq!(api.task_calls_for(2), 1);

    editor.save().unwrap();
    assert_eq!(
        editor.notifications().last().unwrap().message,
        "Day's tasks updated successfully!"
    );
    assert_eq!(api.status_of(day), Some(DayStatus::Posted));
}

#[test]
fn prefill_reports_hours_recorded_only_by_name() {
    use rtimesheet::models::day_sheet::HourRecord;

    let day = d(2026, 10, 12);
    let mut record = full_day(day, DayStatus::Posted, 1, 11);
    record.hours[1] = HourRecord {
        hour: 2,
        project_id: None,
        project_name: Some("Atlas".into()),
        task_id: None,
        task_name: Some("Design".into()),
        details: Some("notes".into()),
    };
    let api = FakeApi::new().with_days(vec![record]);
    let session = employee_session();

    let mut editor = DayEditor::open(&api, &session, day).unwrap();
    let row = editor.entry(2).unwrap();
    assert_eq!(row.project, None);
    assert_eq!(row.task, None);
    assert_eq!(row.details, "notes");
    assert_eq!(editor.completed_hours(), 7);

    let notes = editor.take_notifications();
    assert!(notes.iter().any(|n| n.is_error()
        && n.message == "Could not restore project/task for hour(s) 2"));
}

#[test]
fn submitted_and_accepted_days_are_locked() {
    let api = FakeApi::new().with_days(vec![
        full_day(d(2026, 10, 1), DayStatus::Submitted, 1, 11),
        full_day(d(2026, 10, 2), DayStatus::Accepted, 1, 11),
    ]);
    let session = employee_session();

    assert!(matches!(
        DayEditor::open(&api, &session, d(2026, 10, 1)),
        Err(AppError::DayLocked(_, DayStatus::Submitted))
    ));
    assert!(matches!(
        DayEditor::open(&api, &session, d(2026, 10, 2)),
        Err(AppError::DayLocked(_, DayStatus::Accepted))
    ));

    let fresh = DayEditor::open(&api, &session, d(2026, 10, 3)).unwrap();
    assert!(!fresh.is_editing());
    assert_eq!(fresh.completed_hours(), 0);
}
