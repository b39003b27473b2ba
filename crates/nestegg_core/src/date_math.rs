//! Day-granularity calendar arithmetic for the plan's day numbering.
//!
//! The plan addresses time as whole days since its epoch (the birth
//! date). jiff `Span` arithmetic is correct but heavy for a loop that
//! converts tens of thousands of day offsets, so the helpers here use
//! Rata Die day-numbering for O(1) date/offset conversion and direct
//! calendar arithmetic for the monthly loan payment schedule.

use jiff::civil::Date;

/// Convert a civil date to a Rata Die day number (days since 0001-01-01),
/// using the proleptic Gregorian calendar.
#[inline]
fn rata_die(d: Date) -> i64 {
    let y = i64::from(d.year());
    let m = i64::from(d.month());
    let day = i64::from(d.day());

    // Shift March = month 1 so February sits at the end of the year
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

/// Convert a Rata Die day number back to a civil date.
#[inline]
fn rd_to_date(rd: i64) -> Date {
    // Shift so day 0 = March 1, year 0
    let z = rd + 306;
    let h = 100 * z - 25;
    let a = h / 3_652_425;
    let b = a - a / 4;
    let y = (100 * b + h) / 36_525;
    let c = b + z - 365 * y - y / 4;
    let m = (5 * c + 456) / 153;
    let day = c - (153 * m - 457) / 5;

    let (year, month) = if m > 12 { (y + 1, m - 12) } else { (y, m) };

    jiff::civil::date(year as i16, month as i8, day as i8)
}

/// Day offset of `date` relative to the plan epoch. Negative when the
/// date precedes the epoch.
#[inline]
pub fn day_of(epoch: Date, date: Date) -> i64 {
    rata_die(date) - rata_die(epoch)
}

/// The civil date sitting `day` days after the plan epoch.
#[inline]
pub fn date_at(epoch: Date, day: i64) -> Date {
    rd_to_date(rata_die(epoch) + day)
}

/// Add `n` calendar months, clamping the day-of-month to the target
/// month's length (Jan 31 + 1 month = Feb 28/29). Used for amortized
/// loan payment schedules.
#[inline]
pub fn add_months(date: Date, n: i32) -> Date {
    let total_months = i32::from(date.year()) * 12 + i32::from(date.month()) - 1 + n;
    let year = total_months.div_euclid(12) as i16;
    let month = (total_months.rem_euclid(12) + 1) as i8;
    let max_day = jiff::civil::date(year, month, 1).days_in_month();
    let day = date.day().min(max_day);
    jiff::civil::date(year, month, day)
}
