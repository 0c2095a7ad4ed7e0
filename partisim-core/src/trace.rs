use crate::kernel::KernelCall;
use csv::Writer;
use serde::Serialize;
use std::fs;

#[derive(Debug, Serialize)]
struct TraceEntry {
    seq: usize,
    op: String,
    args_json: String,
}

/// Writes a recorded kernel call log to CSV, one row per boundary call.
pub struct TraceWriter {
    writer: Writer<fs::File>,
}

impl TraceWriter {
    pub fn new(path: &str) -> Result<Self, anyhow::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn write_calls(&mut self, calls: &[KernelCall]) -> Result<(), anyhow::Error> {
        for (seq, call) in calls.iter().enumerate() {
            let entry = TraceEntry {
                seq,
                op: call.op().to_string(),
                args_json: serde_json::to_string(call)?,
            };
            self.writer.serialize(entry)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
