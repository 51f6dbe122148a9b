//! Manager review of one subordinate's days.

use crate::api::TimesheetApi;
use crate::core::filter::{self, ViewMode};
use crate::core::workflow::{Decision, StatusWorkflow};
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::day_sheet::DaySheet;
use crate::models::session::Session;
use crate::ui::messages::Notification;
use crate::utils::date::DateRange;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct EmployeeReview {
    employee: UserId,
    range: DateRange,
    mode: ViewMode,
    days: Vec<DaySheet>,
    selected: BTreeSet<NaiveDate>,
}

impl EmployeeReview {
    pub fn load(
        api: &dyn TimesheetApi,
        session: &Session,
        employee: UserId,
        range: DateRange,
        mode: ViewMode,
    ) -> AppResult<Self> {
        if !session.is_manager {
            return Err(AppError::Forbidden);
        }
        let mut days = api.employee_sheet(session, employee, &range)?;
        days.sort_by_key(|d| d.day);
        Ok(Self {
            employee,
            range,
            mode,
            days,
            selected: BTreeSet::new(),
        })
    }

    pub fn employee(&self) -> UserId {
        self.employee
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Days shown in the current mode.
    pub fn visible(&self) -> Vec<&DaySheet> {
        filter::by_mode(&self.days, self.mode, &self.range)
    }

    /// Message to show when the current mode has nothing to list.
    pub fn empty_message(&self) -> Option<String> {
        self.visible()
            .is_empty()
            .then(|| self.mode.empty_message())
    }

    pub fn toggle(&mut self, day: NaiveDate) {
        if !self.selected.remove(&day) {
            self.selected.insert(day);
        }
    }

    /// Select every visible day, or clear the selection if all of them are
    /// already selected.
    pub fn select_all(&mut self) {
        let visible: BTreeSet<NaiveDate> = self.visible().iter().map(|d| d.day).collect();
        if !visible.is_empty() && visible == self.selected {
            self.selected.clear();
        } else {
            self.selected = visible;
        }
    }

    pub fn selected(&self) -> Vec<NaiveDate> {
        self.selected.iter().copied().collect()
    }

    /// Apply `decision` to the selection.
    ///
    /// Success clears the selection and re-reads the range; on failure the
    /// days and the selection are left as they were.
    pub fn decide(
        &mut self,
        api: &dyn TimesheetApi,
        session: &Session,
        decision: Decision,
    ) -> AppResult<Option<Notification>> {
        let days = self.selected();
        if !StatusWorkflow::decide(api, session, self.employee, &days, decision)? {
            return Ok(None);
        }

        self.selected.clear();
        let mut days = api.employee_sheet(session, self.employee, &self.range)?;
        days.sort_by_key(|d| d.day);
        self.days = days;
        Ok(Some(Notification::success(decision.success_message())))
    }
}
