// ==========================================
// Pool Planner - Competition schedule sheet
// ==========================================
// Responsibility: fixed three-day timetable, one block per configured pool
// Rule: blocks for pools that are not configured are left out
// ==========================================

use crate::i18n;
use crate::report::ReportSheet;

struct ScheduleWriter<'a> {
    locale: &'a str,
    sheet: ReportSheet,
}

impl<'a> ScheduleWriter<'a> {
    fn text(&self, key: &str) -> String {
        i18n::t(self.locale, key)
    }

    fn pool_text(&self, key: &str, pool: &str) -> String {
        i18n::t_with_args(self.locale, key, &[("pool", pool)])
    }

    fn day(&mut self, day_key: &str) {
        let row = [self.text("schedule.title"), self.text(day_key)];
        self.sheet.push_bold_row(row);
    }

    fn entry(&mut self, time: &str, activity: String) {
        let time = format!("{} {}", self.text("schedule.time_prefix"), time);
        self.sheet.push_row([time, activity]);
    }

    fn blank(&mut self) {
        self.sheet.push_blank();
    }
}

/// Timetable sheet for the configured pools
///
/// `pool_names` is the full declared pool list, not only pools with entrants.
pub fn build_schedule_sheet(locale: &str, pool_names: &[String]) -> ReportSheet {
    let pool = |idx: usize| pool_names.get(idx).map(String::as_str);
    let mut w = ScheduleWriter {
        locale,
        sheet: ReportSheet::new(i18n::t(locale, "schedule.sheet")),
    };

    w.day("schedule.friday");
    w.entry("16:00-20:00", w.text("schedule.hall_open_training"));
    w.entry("20:00", w.text("schedule.team_leader_meeting"));
    w.blank();
    w.blank();

    w.day("schedule.saturday");
    if let Some(first) = pool(0) {
        w.entry("09:00", w.pool_text("schedule.hall_opens_pool", first));
        w.entry("09:00-10:20", w.text("schedule.general_warmup"));
        w.entry("10:30", w.text("schedule.competition_start"));
        w.entry("12:40", w.pool_text("schedule.awards_pool", first));
        w.blank();
    }
    if let Some(second) = pool(1) {
        w.entry("13:00-14:20", w.pool_text("schedule.pool_warmup", second));
        w.entry("14:30-17:00", w.text("schedule.competition"));
        w.entry("17:00", w.pool_text("schedule.awards_pool", second));
        w.blank();
    }
    w.blank();

    w.day("schedule.sunday");
    if let Some(third) = pool(2) {
        w.entry("09:00", w.pool_text("schedule.hall_opens_pool", third));
        w.entry("09:00-11:20", w.text("schedule.general_warmup"));
        w.entry("11:30-14:00", w.text("schedule.competition"));
        match pool(3) {
            Some(fourth) => {
                w.blank();
                w.entry("14:15-15:40", w.pool_text("schedule.pool_warmup", fourth));
                w.entry("15:45-18:15", w.pool_text("schedule.competition_pool", fourth));
                let awards = i18n::t_with_args(
                    locale,
                    "schedule.awards_pools",
                    &[("first", third), ("second", fourth)],
                );
                w.entry("18:20", awards);
            }
            None => w.entry("14:00", w.pool_text("schedule.awards_pool", third)),
        }
    }

    w.sheet
}
