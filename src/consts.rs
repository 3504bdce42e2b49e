/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Months in a calendar year, used for offset arithmetic
pub const MONTHS_PER_YEAR: i64 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Days in a week, and the number of distinct weekday values
pub const DAYS_IN_WEEK: u8 = 7;

/// Weekday number for Sunday (weekdays are numbered 1 = Sunday ..= 7 = Saturday)
pub const SUNDAY: u8 = 1;
/// Weekday number for Saturday
pub const SATURDAY: u8 = 7;

/// Fewest days any calendar month has
pub const MIN_MONTH_DAYS: u32 = 28;
/// Most days any calendar month has
pub const MAX_MONTH_DAYS: u32 = 31;

/// Year/month separator used by `Month`'s text form (`YYYY-MM`)
pub const MONTH_SEPARATOR: char = '-';
