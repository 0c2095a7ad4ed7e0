use anyhow::{Context, Result};
use clap::Parser;
use partisim_core::trace::TraceWriter;
use partisim_core::RecordingKernel;
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod lint;

/// Validates a partisim model file by replaying it through the modeling
/// layer against a recording kernel.
#[derive(Parser)]
#[command(name = "partisim", version)]
struct Args {
    /// Path to the model YAML file.
    model: PathBuf,

    /// Write the kernel call trace as CSV into a timestamped directory
    /// under this path.
    #[arg(long)]
    trace_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("--- Partisim Model Linter ---");
    let model = config::load_model(&args.model)?;
    if let Some(model_id) = &model.model_id {
        println!("Model: {}", model_id);
    }

    let mut kernel = RecordingKernel::new();
    let report = lint::build_model(&model, &mut kernel)?;

    println!(
        "Model OK: {} species, {} reactions, {} placements, {} kernel calls",
        report.species, report.reactions, report.placements, report.kernel_calls
    );

    if let Some(trace_dir) = &args.trace_dir {
        let trace_path = write_trace(trace_dir, &args.model, &kernel, &report)?;
        println!("Kernel call trace written to '{}'", trace_path.display());
    }

    Ok(())
}

fn write_trace(
    trace_dir: &Path,
    model_path: &Path,
    kernel: &RecordingKernel,
    report: &lint::LintReport,
) -> Result<PathBuf> {
    let output_dir = trace_dir.join(format!(
        "trace_{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    // Copy the model file and drop the replay summary alongside the trace
    // for traceability.
    if let Some(file_name) = model_path.file_name() {
        fs::copy(model_path, output_dir.join(file_name))?;
    }
    fs::write(
        output_dir.join("report.json"),
        serde_json::to_string_pretty(report)?,
    )?;

    let trace_path = output_dir.join("kernel_calls.csv");
    let path_str = trace_path
        .to_str()
        .context("Trace path is not valid UTF-8")?;
    let mut writer = TraceWriter::new(path_str)?;
    writer.write_calls(kernel.calls())?;
    Ok(trace_path)
}
