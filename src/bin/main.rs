use clap::Parser;
use cutfill::{calculate, export, PointGroup, SectionParams};
use serde::Deserialize;
use std::path::PathBuf;

/// Input document: both layers' tessellated point groups plus the
/// resolved section parameters (layer/scale inference happens upstream).
#[derive(Deserialize)]
struct InputDoc {
    design: Vec<PointGroup>,
    terrain: Vec<PointGroup>,
    sections: Vec<SectionParams>,
}

#[derive(Parser)]
#[command(name = "cutfill", about = "Earthwork cut/fill areas from longitudinal profile geometry")]
struct Cli {
    /// Input JSON (design/terrain point groups + section parameters)
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV path (semicolon-delimited, one row per bin)
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.input)?;
    let doc: InputDoc = serde_json::from_str(&raw)?;

    let result = calculate(&doc.design, &doc.terrain, &doc.sections);
    export::write_bins_to_path(&cli.output, &result.bins)?;

    eprintln!(
        "Wrote {} bins across {} sections to {} (fill {}, cut {})",
        result.bins.len(),
        result.sections_processed,
        cli.output.display(),
        result.total_fill,
        result.total_cut,
    );
    Ok(())
}
