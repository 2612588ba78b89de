use anyhow::{Context, Result};
use chunker_core::config::{self, AppConfig};
use chunker_core::filter::parse_pattern_list;
use chunker_core::pipeline;
use clap::Parser;

#[derive(Parser)]
#[command(name = "chunker")]
#[command(about = "Generate a manifest chunk (JSON item array) from a directory", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    /// Directory to scan
    #[arg(long)]
    root: Option<String>,

    /// URL prefix prepended to each item (e.g. /pdfs/, /images/)
    #[arg(long)]
    url_prefix: Option<String>,

    /// Output file
    #[arg(long)]
    out: Option<String>,

    /// Also walk subdirectories
    #[arg(long)]
    recursive: bool,

    /// Comma-separated glob patterns to include (e.g. '*.pdf,*.png'); empty = all
    #[arg(long)]
    include: Option<String>,

    /// Comma-separated glob patterns to exclude (e.g. '*.tmp,*.part')
    #[arg(long)]
    exclude: Option<String>,

    /// Add the detected type as a tag on every item
    #[arg(long)]
    add_type_tag: bool,

    /// Additional tag applied to all items (e.g. 'catalogue')
    #[arg(long)]
    extra_tag: Option<String>,

    /// Output JSON summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
    apply_overrides(&mut cfg, &cli);

    let summary = pipeline::run(&cfg).context("run pipeline")?;

    if cli.json {
        let summary_json = serde_json::json!({
            "status": "ok",
            "out": cfg.output.path,
            "discovered": summary.discovered,
            "matched": summary.matched,
            "written": summary.written,
        });
        println!("{}", serde_json::to_string_pretty(&summary_json)?);
    } else {
        println!(
            "wrote {} with {} items ({} discovered)",
            cfg.output.path, summary.written, summary.discovered
        );
    }
    Ok(())
}

fn apply_overrides(cfg: &mut AppConfig, cli: &Cli) {
    if let Some(root) = &cli.root {
        cfg.scan.root = root.clone();
    }
    if cli.recursive {
        cfg.scan.recursive = true;
    }
    if let Some(include) = &cli.include {
        cfg.scan.include = parse_pattern_list(include);
    }
    if let Some(exclude) = &cli.exclude {
        cfg.scan.exclude = parse_pattern_list(exclude);
    }
    if let Some(prefix) = &cli.url_prefix {
        cfg.output.url_prefix = prefix.clone();
    }
    if let Some(out) = &cli.out {
        cfg.output.path = out.clone();
    }
    if cli.add_type_tag {
        cfg.tags.add_type_tag = true;
    }
    if let Some(tag) = &cli.extra_tag {
        cfg.tags.extra_tag = Some(tag.clone());
    }
}
