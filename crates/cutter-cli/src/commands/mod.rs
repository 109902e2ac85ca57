pub mod config;
pub mod cut;
pub mod init;
pub mod inspect;
pub mod join;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shared by cut and join.
pub(crate) fn chunk_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}
