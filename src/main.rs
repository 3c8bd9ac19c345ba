use anyhow::Context;
use clap::{Parser, ValueEnum};
use semrank::input;
use semrank_core::{ResourceFetcher, WordEmbeddings, DEFAULT_RESOURCE};
use semrank_report::{dump_path, write_matrix, write_ranking_table, DumpFormat};
use semrank_similarity::{
    compute_distances, rank_all, BaselineStrategy, DistanceStrategy, WmdStrategy,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Compare baseline and WMD ranking of competences against query phrases
#[derive(Parser, Debug)]
#[command(name = "semrank")]
#[command(about = "Rank competence labels against query phrases by semantic similarity", long_about = None)]
struct Args {
    /// Query file: one "phrase<TAB>correct-rank" pair per line
    #[arg(short, long)]
    input: PathBuf,

    /// Competence file overriding the built-in list (same layout; ranks
    /// must be a permutation of 1..N)
    #[arg(short, long)]
    competences: Option<PathBuf>,

    /// Embedding table: a local file, or the name of a known resource
    #[arg(short, long, default_value = DEFAULT_RESOURCE)]
    embeddings: String,

    /// Directory for the distance and ranking dump files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Dump file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for DumpFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DumpFormat::Text,
            OutputFormat::Json => DumpFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting semrank v{}", env!("CARGO_PKG_VERSION"));

    let fetcher = ResourceFetcher::with_default_cache();
    let table_path = fetcher
        .resolve(&args.embeddings)
        .with_context(|| format!("cannot resolve embedding table '{}'", args.embeddings))?;
    info!("Embedding table: {}", table_path.display());

    let started = Instant::now();
    let embeddings = WordEmbeddings::load(&table_path)
        .with_context(|| format!("cannot load embedding table {}", table_path.display()))?;
    info!(
        "Loaded {} vectors of dimension {} in {:.2?}",
        embeddings.len(),
        embeddings.dim(),
        started.elapsed()
    );

    let queries = input::load_queries(&args.input)?;
    let competences = match &args.competences {
        Some(path) => input::load_competences(path)?,
        None => input::default_competences(),
    };
    info!(
        "{} queries against {} competences",
        queries.len(),
        competences.len()
    );

    let query_list: Vec<String> = queries.iter().map(|(q, _)| q.clone()).collect();
    let competence_list: Vec<String> = competences.iter().map(|(c, _)| c.clone()).collect();

    let format = DumpFormat::from(args.format);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create output directory {}", args.out_dir.display()))?;

    let run = |strategy: &dyn DistanceStrategy| -> anyhow::Result<semrank::RankMatrix> {
        let started = Instant::now();
        let distances = compute_distances(strategy, &query_list, &competence_list);
        info!(
            "Computed {} distances in {:.2?}",
            strategy.name(),
            started.elapsed()
        );

        let path = dump_path(&args.out_dir, &format!("dict_{}", strategy.name()), format);
        write_matrix(&path, &distances, format)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!("Wrote {}", path.display());

        let ranking = rank_all(&distances);
        let path = dump_path(
            &args.out_dir,
            &format!("ranking_{}", strategy.name()),
            format,
        );
        write_matrix(&path, &ranking, format)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!("Wrote {}", path.display());

        Ok(ranking)
    };

    let baseline_ranking = run(&BaselineStrategy::new(&embeddings))?;
    let wmd_ranking = run(&WmdStrategy::new(&embeddings))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_ranking_table(&mut out, &queries, &competences, &baseline_ranking, &wmd_ranking)?;
    out.flush()?;

    Ok(())
}
