//! Aggregate statistics over the analysis history of a route.
//!
//! Every function takes the records to summarize plus the `now` the time
//! window is measured from, so results are reproducible.
mod analytics_ops;
mod congestion_forecast;
mod day_of_week_pattern;
mod peak_hours;
mod rolling_congestion;
mod route_reliability;
mod seasonal_trend;
mod traffic_hotspots;

pub use analytics_ops::{mean, records_within, std_dev};
pub use congestion_forecast::{forecast_congestion, CongestionForecast, FORECAST_SAMPLE_SIZE};
pub use day_of_week_pattern::{day_of_week_pattern, DailyProfile, DayOfWeekPattern};
pub use peak_hours::{peak_hours, HourlyProfile, PeakHours};
pub use rolling_congestion::{rolling_congestion, RollingCongestion};
pub use route_reliability::{route_reliability, RouteReliability, MIN_RELIABILITY_SAMPLES};
pub use seasonal_trend::{seasonal_trend, MonthlyProfile, SeasonalTrend};
pub use traffic_hotspots::{traffic_hotspots, TrafficHotspot, MIN_HOTSPOT_SAMPLES};
