//! Field names of the analysis output contract consumed by the UI and
//! reporting layers. Names and units (seconds, meters) are fixed.
//!
//! # Example
//!
//! ```json
//! {
//!   "origin": "Connaught Place",
//!   "destination": { "lat": 28.5562, "lon": 77.1000 },
//!   "route_id": "Connaught Place→28.5562,77.1",
//!   "status": "ranked",
//!   "analyzed_routes": [
//!     {
//!       "route_index": 2,
//!       "travel_time_s": 1500.0,
//!       "no_traffic_s": 1500.0,
//!       "delay_s": 0.0,
//!       "length_m": 15000.0,
//!       "congestion_ratio": 1.0,
//!       "calculated_cost": 1515.0,
//!       "ml_predicted_congestion": 1.12,
//!       "geometry": [[28.63, 77.21], [28.55, 77.10]]
//!     }
//!   ],
//!   "best_route_index": 2,
//!   "timestamp": "2024-05-01T08:30:00Z"
//! }
//! ```
pub const ORIGIN: &str = "origin";
pub const DESTINATION: &str = "destination";
pub const ROUTE_ID: &str = "route_id";
pub const STATUS: &str = "status";
pub const ANALYZED_ROUTES: &str = "analyzed_routes";
pub const BEST_ROUTE_INDEX: &str = "best_route_index";
pub const TIMESTAMP: &str = "timestamp";
pub const WARNINGS: &str = "warnings";

pub const ROUTE_INDEX: &str = "route_index";
pub const TRAVEL_TIME_S: &str = "travel_time_s";
pub const NO_TRAFFIC_S: &str = "no_traffic_s";
pub const DELAY_S: &str = "delay_s";
pub const LENGTH_M: &str = "length_m";
pub const CONGESTION_RATIO: &str = "congestion_ratio";
pub const CALCULATED_COST: &str = "calculated_cost";
pub const ML_PREDICTED_CONGESTION: &str = "ml_predicted_congestion";
pub const GEOMETRY: &str = "geometry";

/// separator used when joining origin and destination into a route id.
pub const ROUTE_ID_SEPARATOR: &str = "→";

/// suffix joining a route id with a route index for per-route history rows.
pub const ROUTE_INDEX_SUFFIX: &str = "_route";

/// column order of a flat per-route export row.
pub const EXPORT_COLUMNS: [&str; 12] = [
    ROUTE_ID,
    ORIGIN,
    DESTINATION,
    ROUTE_INDEX,
    TRAVEL_TIME_S,
    NO_TRAFFIC_S,
    DELAY_S,
    LENGTH_M,
    CONGESTION_RATIO,
    CALCULATED_COST,
    ML_PREDICTED_CONGESTION,
    GEOMETRY,
];
