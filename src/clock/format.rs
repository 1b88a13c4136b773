use super::source::ZonedTime;

/// `GMT+10`, `GMT-5:30`, `GMT+0`.
pub fn format_offset(offset_minutes: i32) -> String {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let abs = offset_minutes.unsigned_abs();
    let (hours, minutes) = (abs / 60, abs % 60);
    if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}

/// `14:05:09` on a 24-hour clock, `02:05:09 PM` otherwise.
pub fn format_clock(time: &ZonedTime, use_24_hour: bool) -> String {
    let pattern = if use_24_hour { "%H:%M:%S" } else { "%I:%M:%S %p" };
    time.local.format(pattern).to_string()
}

/// `Mon, Jan 6`.
pub fn format_date(time: &ZonedTime) -> String {
    time.local.format("%a, %b %-d").to_string()
}
