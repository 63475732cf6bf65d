mod report_ops;
mod route_report;

pub use report_ops::run;
pub use route_report::RouteReport;

pub const DEFAULT_REPORT_DAYS: u32 = 30;
pub const DEFAULT_HOURS_AHEAD: u32 = 24;
pub const DEFAULT_HOTSPOT_DAYS: u32 = 7;
/// window of the day of week pattern
pub const DAY_OF_WEEK_DAYS: u32 = 90;
/// window of the seasonal trend
pub const SEASONAL_MONTHS: u32 = 12;
