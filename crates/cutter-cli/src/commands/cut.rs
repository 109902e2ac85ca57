use anyhow::Result;
use std::path::Path;

use cutter_core::config::CutterConfig;

use super::chunk_progress;

pub fn run(
    file: &Path,
    chunks: Option<u32>,
    output: Option<&Path>,
    config: &CutterConfig,
) -> Result<()> {
    let chunks = chunks.unwrap_or(config.cutter.default_chunks);
    let output = output.map_or_else(|| config.output_dir(), Path::to_path_buf);
    std::fs::create_dir_all(&output)?;

    println!("Cutting {} into {chunks} chunks", file.display());

    let pb = chunk_progress(u64::from(chunks));
    let report = cutter_core::cut_with_progress(file, &output, chunks, |info| {
        pb.set_message(format!("{}", info.path.display()));
        pb.inc(1);
    });
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.finish_with_message("done");

    println!("\nCut completed:");
    println!("  Source:       {}", report.source.display());
    println!("  Size:         {} bytes", report.source_size);
    println!("  Chunk size:   {} bytes", report.chunk_size);
    println!("  Chunks:       {}", report.chunks.len());
    if let Some(first) = report.chunks.first() {
        println!("  First chunk:  {}", first.path.display());
    }

    Ok(())
}
