use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_wikilinks_config::Config;
use markdown_wikilinks_engine::{DocumentLink, ResolvedTarget, document_links, io, resolve};
use std::path::{Path, PathBuf};

/// Resolve [[wiki links]] in markdown documents to files.
#[derive(Debug, Parser)]
#[command(name = "markdown-wikilinks", version)]
struct Cli {
    /// Workspace root to search, in priority order. Repeatable.
    /// Defaults to `search_roots` from the config file.
    #[arg(long = "root", global = true)]
    roots: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve every link in one document
    Links { file: PathBuf },
    /// Resolve a single link name
    Resolve {
        name: String,
        /// Directory of the linking document
        #[arg(long, default_value = ".")]
        from: PathBuf,
    },
    /// Resolve the links of every markdown file under a root. `--root`
    /// directories are searched after ROOT.
    Scan { root: PathBuf },
    /// Write the `--root` directories to the config file as default roots
    Init,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let lines = match cli.command {
        Command::Links { file } => links(&file, &search_roots(cli.roots)?)?,
        Command::Resolve { name, from } => {
            vec![format_target(&resolve(&name, &from, &search_roots(cli.roots)?))]
        }
        Command::Scan { root } => scan(&root, &validated(cli.roots)?)?,
        Command::Init => vec![init(cli.roots, &Config::config_path())?],
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}

/// Roots given on the command line, else the configured ones.
fn search_roots(cli_roots: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let roots = if cli_roots.is_empty() {
        let config_path = Config::config_path();
        match Config::load().context("Failed to load config file")? {
            Some(config) => {
                log::info!("Using search roots from {}", config_path.display());
                config.search_roots
            }
            None => Vec::new(),
        }
    } else {
        cli_roots
    };

    validated(roots)
}

fn validated(roots: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    for root in &roots {
        io::validate_search_root(root)
            .with_context(|| format!("Search root '{}' is invalid", root.display()))?;
    }
    Ok(roots)
}

/// Saves `roots` as absolute paths to `config_path`.
fn init(roots: Vec<PathBuf>, config_path: &Path) -> Result<String> {
    if roots.is_empty() {
        bail!("Pass at least one --root to store in the config file");
    }

    let search_roots = validated(roots)?
        .iter()
        .map(|root| {
            std::path::absolute(root)
                .with_context(|| format!("Failed to resolve '{}'", root.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    Config { search_roots }
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;
    log::info!("Saved config to {}", config_path.display());

    Ok(format!("wrote {}", config_path.display()))
}

fn links(file: &Path, roots: &[PathBuf]) -> Result<Vec<String>> {
    let text = io::read_document(file)
        .with_context(|| format!("Failed to read document '{}'", file.display()))?;

    Ok(document_links(&text, source_dir(file), roots)
        .iter()
        .map(|link| format_link(&text, link))
        .collect())
}

fn scan(root: &Path, extra_roots: &[PathBuf]) -> Result<Vec<String>> {
    let files = io::scan_markdown_files(root)
        .with_context(|| format!("Failed to scan '{}'", root.display()))?;
    log::info!("Scanning {} markdown files under {}", files.len(), root.display());

    let roots: Vec<&Path> = std::iter::once(root)
        .chain(extra_roots.iter().map(PathBuf::as_path))
        .collect();

    let mut lines = Vec::new();
    for relative in files {
        let path = relative.to_path(root);
        let text = io::read_document(&path)
            .with_context(|| format!("Failed to read document '{}'", path.display()))?;
        for link in document_links(&text, source_dir(&path), &roots) {
            lines.push(format!("{relative}:{}", format_link(&text, &link)));
        }
    }

    Ok(lines)
}

/// Directory a document's links are resolved from.
fn source_dir(file: &Path) -> &Path {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn format_link(text: &str, link: &DocumentLink) -> String {
    format!(
        "{}..{}\t{}\t{}",
        link.span.start,
        link.span.end,
        &text[link.span.range()],
        format_target(&link.target)
    )
}

fn format_target(target: &ResolvedTarget) -> String {
    match target {
        ResolvedTarget::ExistingFile { path } => path.display().to_string(),
        ResolvedTarget::PendingCreation { suggested_path, .. } => {
            format!("create {}", suggested_path.display())
        }
    }
}
