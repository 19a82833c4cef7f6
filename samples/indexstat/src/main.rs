//! Load OBJ models, index each on its own thread, and report how much the index buffers save.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use trisoup::obj::LoadOptions;
use vertex_indexer::{index_soup, ArrayIndex, LoadError};

mod cli;
mod report;

use cli::{Cli, IndexWidth};
use report::Summary;

#[derive(Debug, thiserror::Error)]
enum MeshError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("worker thread panicked while processing this mesh")]
    Panicked,
}

#[tracing::instrument(skip(options))]
fn process<Idx: ArrayIndex>(path: &Path, options: &LoadOptions) -> Result<Summary, LoadError> {
    let soup = trisoup::obj::load(path, options)?;
    let mesh = index_soup::<Idx>(&soup)?;
    tracing::info!(
        corners = soup.len(),
        vertices = mesh.vertex_count(),
        "indexed mesh"
    );
    Ok(Summary::new(path, &soup, &mesh))
}

/// Process every file on its own thread. Results are in the same order as `files`.
fn process_all<Idx: ArrayIndex>(
    files: &[PathBuf],
    options: &LoadOptions,
) -> Vec<Result<Summary, MeshError>> {
    crossbeam::scope(|s| {
        let handles: Vec<_> = files
            .iter()
            .map(|path| s.spawn(move |_| process::<Idx>(path, options)))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(res) => res.map_err(MeshError::from),
                Err(_) => Err(MeshError::Panicked),
            })
            .collect()
    })
    .expect("every worker is joined before the scope ends")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let options = LoadOptions { flip_v: cli.flip_v };
    tracing::debug!(files = cli.files.len(), index_width = %cli.index_width, "indexing");
    let results = match cli.index_width {
        IndexWidth::U16 => process_all::<u16>(&cli.files, &options),
        IndexWidth::U32 => process_all::<u32>(&cli.files, &options),
    };

    let mut failed = false;
    for (path, res) in cli.files.iter().zip(results) {
        match res {
            Ok(summary) => println!("{summary}"),
            Err(e) => {
                tracing::error!(path = ?path, "{e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
