//! CSV output backend — one file per series in the output directory.

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use crate::OutputResult;
use crate::row::{
    ConnectionRow, ErrorDropRow, ErrorSampleRow, FinalErrorRow, MissedAreaRow, MissionSummaryRow,
    ReceivedRow, WaypointArrivalRow,
};
use crate::writer::OutputWriter;

/// Writes the mission report to eight CSV files.
pub struct CsvWriter {
    errors: Writer<File>,
    drops: Writer<File>,
    received: Writer<File>,
    arrivals: Writer<File>,
    connections: Writer<File>,
    missed: Writer<File>,
    finals: Writer<File>,
    summary: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) all report files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut errors = Writer::from_path(dir.join("error_series.csv"))?;
        errors.write_record(["agent_id", "time_s", "error_per_m"])?;

        let mut drops = Writer::from_path(dir.join("error_drops.csv"))?;
        drops.write_record(["agent_id", "time_s", "drop_m"])?;

        let mut received = Writer::from_path(dir.join("received_data.csv"))?;
        received.write_record(["agent_id", "time_s", "vertices", "edges"])?;

        let mut arrivals = Writer::from_path(dir.join("waypoint_arrivals.csv"))?;
        arrivals.write_record(["agent_id", "time_s", "slack_s"])?;

        let mut connections = Writer::from_path(dir.join("connection_trace.csv"))?;
        connections.write_record(["agent_id", "tick", "connected"])?;

        let mut missed = Writer::from_path(dir.join("missed_areas.csv"))?;
        missed.write_record(["length_m", "width_m"])?;

        let mut finals = Writer::from_path(dir.join("final_errors.csv"))?;
        finals.write_record(["agent_id", "error_m"])?;

        let mut summary = Writer::from_path(dir.join("mission_summary.csv"))?;
        summary.write_record([
            "missed_area_m2",
            "missed_holes",
            "total_travel_m",
            "total_agent_time_s",
        ])?;

        Ok(Self {
            errors,
            drops,
            received,
            arrivals,
            connections,
            missed,
            finals,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_error_series(&mut self, rows: &[ErrorSampleRow]) -> OutputResult<()> {
        for row in rows {
            self.errors.write_record(&[
                row.agent_id.to_string(),
                row.time_s.to_string(),
                row.error_per_m.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_error_drops(&mut self, rows: &[ErrorDropRow]) -> OutputResult<()> {
        for row in rows {
            self.drops.write_record(&[
                row.agent_id.to_string(),
                row.time_s.to_string(),
                row.drop_m.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_received(&mut self, rows: &[ReceivedRow]) -> OutputResult<()> {
        for row in rows {
            self.received.write_record(&[
                row.agent_id.to_string(),
                row.time_s.to_string(),
                row.vertices.to_string(),
                row.edges.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_waypoint_arrivals(&mut self, rows: &[WaypointArrivalRow]) -> OutputResult<()> {
        for row in rows {
            self.arrivals.write_record(&[
                row.agent_id.to_string(),
                row.time_s.to_string(),
                row.slack_s.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_connection_trace(&mut self, rows: &[ConnectionRow]) -> OutputResult<()> {
        for row in rows {
            self.connections.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                (row.connected as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_missed_areas(&mut self, rows: &[MissedAreaRow]) -> OutputResult<()> {
        for row in rows {
            self.missed
                .write_record(&[row.length_m.to_string(), row.width_m.to_string()])?;
        }
        Ok(())
    }

    fn write_final_errors(&mut self, rows: &[FinalErrorRow]) -> OutputResult<()> {
        for row in rows {
            self.finals
                .write_record(&[row.agent_id.to_string(), row.error_m.to_string()])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &MissionSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.missed_area_m2.to_string(),
            row.missed_holes.to_string(),
            row.total_travel_m.to_string(),
            row.total_agent_time_s.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.errors.flush()?;
        self.drops.flush()?;
        self.received.flush()?;
        self.arrivals.flush()?;
        self.connections.flush()?;
        self.missed.flush()?;
        self.finals.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
