use std::io::Write;

use edgeview_engine::{distribute, summarize};
use edgeview_types::{ResourceKind, ResourceRecord, WorkloadSummary};
use tabwriter::TabWriter;

use super::traits::Renderer;
use crate::Result;

const MIN_WIDTH: usize = 8;
const PADDING: usize = 3;

const HEADER: [&str; 6] = ["NAME", "STATUS", "RESTARTS", "READY", "IP", "NODE"];

/// Pod summary table, the default `get` output.
///
/// Only pod records are shown; other kinds in the list are ignored.
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn render(&self, records: Vec<ResourceRecord>, out: &mut dyn Write) -> Result<()> {
        let mut distribution = distribute(records);
        let pods = distribution.take(ResourceKind::Pod);
        let summaries = summarize(&pods)?;

        write_table(&summaries, out)?;
        Ok(())
    }
}

/// Write the header and one aligned row per summary.
///
/// Always ends with a newline, even with no rows.
pub fn write_table(summaries: &[WorkloadSummary], out: &mut dyn Write) -> std::io::Result<()> {
    let mut writer = TabWriter::new(out).minwidth(MIN_WIDTH).padding(PADDING);

    writeln!(writer, "{}", HEADER.join("\t"))?;
    for summary in summaries {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            summary.name,
            summary.phase,
            summary.restarts,
            summary.ready(),
            summary.pod_ip,
            summary.node_name
        )?;
    }

    writer.flush()
}
