use anyhow::Result;
use std::path::Path;

use cutter_core::HEADER_SIZE;

pub fn run(chunk: &Path) -> Result<()> {
    let header = cutter_core::read_header(chunk)?;
    let payload = std::fs::metadata(chunk)?
        .len()
        .saturating_sub(HEADER_SIZE as u64);

    println!("Chunk: {}", chunk.display());
    println!();
    println!("  Index:        {}", header.chunk);
    println!("  Total chunks: {}", header.chunks);
    println!("  Version:      {}", header.version);
    println!("  Payload:      {payload} bytes");
    println!("  Last chunk:   {}", if header.is_last() { "yes" } else { "no" });

    Ok(())
}
