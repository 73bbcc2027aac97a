mod time_utils;

pub use time_utils::{AppInstant, format_long_date, month_name, today_local};
