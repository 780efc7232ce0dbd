//! Assembling report rows from the fleet and writing them out.

use std::path::Path;

use auv_agent::Agent;
use auv_sim::MissionStats;

use crate::csv::CsvWriter;
use crate::error::OutputResult;
use crate::row::{
    ConnectionRow, ErrorDropRow, ErrorSampleRow, FinalErrorRow, MissedAreaRow, MissionSummaryRow,
    ReceivedRow, WaypointArrivalRow,
};
use crate::writer::OutputWriter;

/// The full post-run report, flattened to rows.
#[derive(Debug, Default, Clone)]
pub struct MissionReport {
    pub error_series: Vec<ErrorSampleRow>,
    pub error_drops: Vec<ErrorDropRow>,
    pub received: Vec<ReceivedRow>,
    pub waypoint_arrivals: Vec<WaypointArrivalRow>,
    pub connection_trace: Vec<ConnectionRow>,
    pub missed_areas: Vec<MissedAreaRow>,
    pub final_errors: Vec<FinalErrorRow>,
    pub summary: MissionSummaryRow,
}

impl MissionReport {
    /// Flatten agent logs and fleet statistics into rows.
    pub fn collect(agents: &[Agent], stats: &MissionStats) -> Self {
        let mut report = MissionReport::default();

        for series in &stats.translational_error_series {
            report.error_series.extend(series.samples.iter().map(|s| ErrorSampleRow {
                agent_id: series.agent.0,
                time_s: s.time,
                error_per_m: s.value,
            }));
        }
        for series in &stats.error_drop_series {
            report.error_drops.extend(series.samples.iter().map(|s| ErrorDropRow {
                agent_id: series.agent.0,
                time_s: s.time,
                drop_m: s.value,
            }));
        }

        for agent in agents {
            let id = agent.id().0;
            let log = agent.log();

            report.received.extend(
                log.received_vertices
                    .iter()
                    .zip(&log.received_edges)
                    .map(|(v, e)| ReceivedRow {
                        agent_id: id,
                        time_s: v.time_ms as f64 / 1000.0,
                        vertices: v.count as u64,
                        edges: e.count as u64,
                    }),
            );

            report.waypoint_arrivals.extend(log.waypoint_arrivals.iter().map(|a| {
                WaypointArrivalRow { agent_id: id, time_s: a.time, slack_s: a.slack }
            }));

            report.connection_trace.extend(
                agent
                    .connectivity()
                    .trace()
                    .iter()
                    .enumerate()
                    .map(|(tick, &connected)| ConnectionRow {
                        agent_id: id,
                        tick: tick as u64 + 1,
                        connected,
                    }),
            );
        }

        report.missed_areas = stats
            .missed_lenwidths
            .iter()
            .map(|&(length_m, width_m)| MissedAreaRow { length_m, width_m })
            .collect();

        report.final_errors = stats
            .final_errors
            .iter()
            .map(|&(agent, error_m)| FinalErrorRow { agent_id: agent.0, error_m })
            .collect();

        report.summary = MissionSummaryRow {
            missed_area_m2: stats.missed_area,
            missed_holes: stats.missed.0.len() as u64,
            total_travel_m: stats.total_travel,
            total_agent_time_s: stats.total_agent_time,
        };

        report
    }

    /// Write every series through `writer` (does not call `finish`).
    pub fn write_to<W: OutputWriter>(&self, writer: &mut W) -> OutputResult<()> {
        writer.write_error_series(&self.error_series)?;
        writer.write_error_drops(&self.error_drops)?;
        writer.write_received(&self.received)?;
        writer.write_waypoint_arrivals(&self.waypoint_arrivals)?;
        writer.write_connection_trace(&self.connection_trace)?;
        writer.write_missed_areas(&self.missed_areas)?;
        writer.write_final_errors(&self.final_errors)?;
        writer.write_summary(&self.summary)?;
        Ok(())
    }
}

/// Convenience: collect and write the whole report as CSV files in `dir`.
pub fn write_mission_report(
    dir: &Path,
    agents: &[Agent],
    stats: &MissionStats,
) -> OutputResult<()> {
    let mut writer = CsvWriter::new(dir)?;
    MissionReport::collect(agents, stats).write_to(&mut writer)?;
    writer.finish()
}
