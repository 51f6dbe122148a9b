//! Employee timesheet summary: the days of a range grouped by status, with
//! a selection that can be sent to the manager.

use crate::api::TimesheetApi;
use crate::core::filter;
use crate::core::workflow::StatusWorkflow;
use crate::errors::AppResult;
use crate::models::HOURS_PER_DAY;
use crate::models::day_sheet::DaySheet;
use crate::models::day_status::DayStatus;
use crate::models::session::Session;
use crate::ui::messages::Notification;
use crate::utils::date::DateRange;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct TimeSheetView {
    range: DateRange,
    days: Vec<DaySheet>,
    selected: BTreeSet<NaiveDate>,
}

impl TimeSheetView {
    pub fn load(api: &dyn TimesheetApi, session: &Session, range: DateRange) -> AppResult<Self> {
        let mut days = api.sheet(session, &range)?;
        days.sort_by_key(|d| d.day);
        Ok(Self {
            range,
            days,
            selected: BTreeSet::new(),
        })
    }

    pub fn refresh(&mut self, api: &dyn TimesheetApi, session: &Session) -> AppResult<()> {
        let mut days = api.sheet(session, &self.range)?;
        days.sort_by_key(|d| d.day);
        self.days = days;
        Ok(())
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn days(&self) -> &[DaySheet] {
        &self.days
    }

    pub fn day(&self, day: NaiveDate) -> Option<&DaySheet> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn with_status(&self, status: DayStatus) -> Vec<&DaySheet> {
        filter::by_status(&self.days, status, &self.range)
    }

    /// Days not sent yet.
    pub fn pending(&self) -> Vec<&DaySheet> {
        self.with_status(DayStatus::Posted)
    }

    /// Days the employee may send: not sent yet, or rejected and sent back.
    pub fn sendable(&self) -> Vec<&DaySheet> {
        self.days
            .iter()
            .filter(|d| d.status.is_sendable() && self.range.contains(d.day))
            .collect()
    }

    /// 8 hours for every day of the list that was not rejected.
    pub fn active_hours(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.status != DayStatus::Rejected)
            .count()
            * HOURS_PER_DAY
    }

    pub fn toggle(&mut self, day: NaiveDate) {
        if !self.selected.remove(&day) {
            self.selected.insert(day);
        }
    }

    pub fn select(&mut self, day: NaiveDate) {
        self.selected.insert(day);
    }

    pub fn selected(&self) -> Vec<NaiveDate> {
        self.selected.iter().copied().collect()
    }

    /// Send the selection to the manager.
    ///
    /// On success the selection is cleared and the days are re-read from the
    /// server; on failure nothing local changes.
    pub fn send_selected(
        &mut self,
        api: &dyn TimesheetApi,
        session: &Session,
    ) -> AppResult<Option<Notification>> {
        let days = self.selected();
        if !StatusWorkflow::send(api, session, &days)? {
            return Ok(None);
        }

        self.selected.clear();
        self.refresh(api, session)?;
        Ok(Some(Notification::success("Status updated successfully!")))
    }
}
