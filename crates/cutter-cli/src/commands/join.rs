use anyhow::Result;
use std::path::Path;

use cutter_core::Joiner;
use cutter_core::config::CutterConfig;

use super::chunk_progress;

pub fn run(chunk: &Path, output: Option<&Path>, config: &CutterConfig) -> Result<()> {
    let output = output.map_or_else(|| config.output_dir(), Path::to_path_buf);
    std::fs::create_dir_all(&output)?;

    println!("Joining {} into {}", chunk.display(), output.display());

    // The total is only known once the first header has been read.
    let pb = chunk_progress(0);
    let joiner = Joiner::new(config.cutter.buffer_size);
    let report = joiner.join_with_progress(chunk, &output, |header, len| {
        if pb.length() == Some(0) {
            pb.set_length(u64::from(header.chunks));
        }
        pb.set_message(format!("chunk {} ({len} bytes)", header.chunk));
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

    println!("\nJoin completed:");
    println!("  Output:       {}", report.dest.display());
    println!("  Chunks read:  {}", report.chunks_read);
    println!("  Size:         {} bytes", report.bytes_written);

    Ok(())
}
