//! The backend-agnostic writer trait.

use crate::OutputResult;
use crate::row::{
    ConnectionRow, ErrorDropRow, ErrorSampleRow, FinalErrorRow, MissedAreaRow, MissionSummaryRow,
    ReceivedRow, WaypointArrivalRow,
};

/// Persists report rows.  All methods may be called multiple times with
/// additional batches; `finish` flushes and must be idempotent.
pub trait OutputWriter {
    fn write_error_series(&mut self, rows: &[ErrorSampleRow]) -> OutputResult<()>;
    fn write_error_drops(&mut self, rows: &[ErrorDropRow]) -> OutputResult<()>;
    fn write_received(&mut self, rows: &[ReceivedRow]) -> OutputResult<()>;
    fn write_waypoint_arrivals(&mut self, rows: &[WaypointArrivalRow]) -> OutputResult<()>;
    fn write_connection_trace(&mut self, rows: &[ConnectionRow]) -> OutputResult<()>;
    fn write_missed_areas(&mut self, rows: &[MissedAreaRow]) -> OutputResult<()>;
    fn write_final_errors(&mut self, rows: &[FinalErrorRow]) -> OutputResult<()>;
    fn write_summary(&mut self, row: &MissionSummaryRow) -> OutputResult<()>;
    fn finish(&mut self) -> OutputResult<()>;
}
