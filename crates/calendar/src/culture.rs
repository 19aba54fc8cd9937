//! Persian culture name tables: month and day names, designators, separators.

use std::sync::OnceLock;

use chrono::Weekday;

/// Name tables and conventions for formatting Persian dates.
///
/// Obtain the shared instance with [`PersianCulture::get`].
#[derive(Debug)]
pub struct PersianCulture {
    month_names: [&'static str; 13],
    abbreviated_month_names: [&'static str; 13],
    day_names: [&'static str; 7],
    abbreviated_day_names: [&'static str; 7],
    shortest_day_names: [&'static str; 7],
    am_designator: &'static str,
    pm_designator: &'static str,
    date_separator: &'static str,
    time_separator: &'static str,
    era_name: &'static str,
    first_day_of_week: Weekday,
    two_digit_year_max: i32,
}

/// Month names, Farvardin first. The 13th entry is an empty sentinel for
/// callers that expect lunisolar-sized tables.
const MONTH_NAMES: [&str; 13] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
    "",
];

/// Day names, Sunday first to match [`Weekday::num_days_from_sunday`].
const DAY_NAMES: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
    "شنبه",
];

const SHORT_DAY_NAMES: [&str; 7] = ["ی", "د", "س", "چ", "پ", "ج", "ش"];

static CULTURE: OnceLock<PersianCulture> = OnceLock::new();

impl PersianCulture {
    /// Returns the process-wide culture table, building it on first use.
    pub fn get() -> &'static PersianCulture {
        CULTURE.get_or_init(|| PersianCulture {
            month_names: MONTH_NAMES,
            abbreviated_month_names: MONTH_NAMES,
            day_names: DAY_NAMES,
            abbreviated_day_names: SHORT_DAY_NAMES,
            shortest_day_names: SHORT_DAY_NAMES,
            am_designator: "ق.ظ",
            pm_designator: "ب.ظ",
            date_separator: "/",
            time_separator: ":",
            era_name: "ه.ش",
            first_day_of_week: Weekday::Sat,
            two_digit_year_max: 1410,
        })
    }

    /// Full name of `month` (1..=12); empty for anything else.
    pub fn month_name(&self, month: u8) -> &'static str {
        match month {
            1..=12 => self.month_names[usize::from(month - 1)],
            _ => "",
        }
    }

    /// Abbreviated name of `month` (1..=12); identical to the full name.
    pub fn abbreviated_month_name(&self, month: u8) -> &'static str {
        match month {
            1..=12 => self.abbreviated_month_names[usize::from(month - 1)],
            _ => "",
        }
    }

    /// All 13 month-name entries, including the trailing empty sentinel.
    pub fn month_names(&self) -> &[&'static str; 13] {
        &self.month_names
    }

    /// Full name of a weekday.
    pub fn day_name(&self, weekday: Weekday) -> &'static str {
        self.day_names[weekday.num_days_from_sunday() as usize]
    }

    /// Abbreviated name of a weekday.
    pub fn abbreviated_day_name(&self, weekday: Weekday) -> &'static str {
        self.abbreviated_day_names[weekday.num_days_from_sunday() as usize]
    }

    /// Single-character name of a weekday.
    pub fn shortest_day_name(&self, weekday: Weekday) -> &'static str {
        self.shortest_day_names[weekday.num_days_from_sunday() as usize]
    }

    /// Day names, Sunday first.
    pub fn day_names(&self) -> &[&'static str; 7] {
        &self.day_names
    }

    /// Abbreviated day names, Sunday first.
    pub fn abbreviated_day_names(&self) -> &[&'static str; 7] {
        &self.abbreviated_day_names
    }

    /// Designator for hours before noon.
    pub fn am_designator(&self) -> &'static str {
        self.am_designator
    }

    /// Designator for hours from noon on.
    pub fn pm_designator(&self) -> &'static str {
        self.pm_designator
    }

    /// Separator substituted for `/` in custom patterns.
    pub fn date_separator(&self) -> &'static str {
        self.date_separator
    }

    /// Separator substituted for `:` in custom patterns.
    pub fn time_separator(&self) -> &'static str {
        self.time_separator
    }

    /// Era name rendered by the `g` specifier.
    pub fn era_name(&self) -> &'static str {
        self.era_name
    }

    /// First day of the week (Saturday).
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Upper bound of the window two-digit years are expanded into.
    pub fn two_digit_year_max(&self) -> i32 {
        self.two_digit_year_max
    }

    /// Expands a two-digit year into the window ending at
    /// [`two_digit_year_max`](Self::two_digit_year_max).
    ///
    /// Years of three or more digits are returned unchanged.
    pub fn to_four_digit_year(&self, year: i32) -> i32 {
        if !(0..100).contains(&year) {
            return year;
        }
        let max = self.two_digit_year_max;
        let candidate = (max / 100) * 100 + year;
        if candidate > max { candidate - 100 } else { candidate }
    }

    /// Weekday whose full name is `name`.
    pub fn weekday_from_name(&self, name: &str) -> Option<Weekday> {
        self.day_names
            .iter()
            .position(|&n| n == name)
            .map(weekday_from_sunday_index)
    }

    /// Month (1..=12) whose full or abbreviated name is `name`.
    pub fn month_from_name(&self, name: &str) -> Option<u8> {
        self.month_names[..12]
            .iter()
            .chain(self.abbreviated_month_names[..12].iter())
            .position(|&n| n == name)
            .map(|i| (i % 12) as u8 + 1)
    }

    /// Weekdays in display order, starting at the first day of the week.
    pub fn week(&self) -> [Weekday; 7] {
        let mut day = self.first_day_of_week;
        std::array::from_fn(|_| {
            let current = day;
            day = day.succ();
            current
        })
    }
}

/// Maps a Sunday-based index (0 = Sunday) to a [`Weekday`].
pub(crate) fn weekday_from_sunday_index(index: usize) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
