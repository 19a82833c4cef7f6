use std::path::PathBuf;

use clap::ValueHint;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Width of the integers in each mesh's index buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum IndexWidth {
    #[value(name = "16")]
    U16,
    #[value(name = "32")]
    U32,
}

impl std::fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexWidth::U16 => f.write_str("16"),
            IndexWidth::U32 => f.write_str("32"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,vertex_indexer=info,trisoup=info,indexstat=info",
        env = "INDEXSTAT_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Bits per index in the generated index buffers
    #[arg(short = 'w', long, default_value_t = IndexWidth::U16, env = "INDEXSTAT_INDEX_WIDTH")]
    pub index_width: IndexWidth,
    /// Store `1 - v` for each texture coordinate
    #[arg(long)]
    pub flip_v: bool,
    /// OBJ files to index
    #[arg(num_args = 1.., required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{Cli, IndexWidth, LogFormat};

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["indexstat", "plane.obj", "bike.obj"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert_eq!(cli.index_width, IndexWidth::U16);
        assert!(!cli.flip_v);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn index_width() {
        let cli = Cli::try_parse_from(["indexstat", "-w", "32", "plane.obj"]).unwrap();
        assert_eq!(cli.index_width, IndexWidth::U32);
        assert!(Cli::try_parse_from(["indexstat", "-w", "8", "plane.obj"]).is_err());
    }

    #[test]
    fn needs_a_file() {
        assert!(Cli::try_parse_from(["indexstat"]).is_err());
    }

    #[test]
    fn command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
