//! Run-length formatter for year-month values.

use shamsi_calendar::PersianCulture;

use super::pattern::runs;

pub(crate) fn render(year: i32, month: u8, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for (c, len) in runs(pattern) {
        match c {
            'y' | 'Y' if len <= 2 => out.push_str(&format!("{:0len$}", year % 100)),
            'y' | 'Y' => out.push_str(&format!("{year:0len$}")),
            'm' | 'M' if len <= 2 => out.push_str(&format!("{month:0len$}")),
            'm' | 'M' => out.push_str(PersianCulture::get().month_name(month)),
            other => out.extend(std::iter::repeat_n(other, len)),
        }
    }
    out
}
