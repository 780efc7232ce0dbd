//! `auv-output` — post-run report writers.
//!
//! [`MissionReport::collect`] turns the fleet's accumulated logs and the
//! aggregated [`MissionStats`](auv_sim::MissionStats) into flat row types;
//! any [`OutputWriter`] backend can persist them.  The provided
//! [`CsvWriter`] creates one CSV file per series in an output directory:
//!
//! | File                    | Contents                                  |
//! |-------------------------|-------------------------------------------|
//! | `error_series.csv`      | normalized translational error over time  |
//! | `error_drops.csv`       | per-correction error reductions           |
//! | `received_data.csv`     | merged vertex/edge counts per contact     |
//! | `waypoint_arrivals.csv` | arrival times and schedule slack          |
//! | `connection_trace.csv`  | per-tick connectivity per agent           |
//! | `missed_areas.csv`      | length/width of each missed hole          |
//! | `final_errors.csv`      | last recorded error per agent             |
//! | `mission_summary.csv`   | one fleet-level result row                |

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::{MissionReport, write_mission_report};
pub use row::{
    ConnectionRow, ErrorDropRow, ErrorSampleRow, FinalErrorRow, MissedAreaRow, MissionSummaryRow,
    ReceivedRow, WaypointArrivalRow,
};
pub use writer::OutputWriter;
