use crate::config::AppConfig;
use crate::error::ChunkError;
use crate::filter::NameFilter;
use crate::models::PipelineSummary;
use crate::record::{self, RecordOptions};
use crate::scanner;
use std::path::Path;
use tracing::{debug, info};

/// Runs the whole pipeline: scan, filter, build records, write the chunk.
/// The output file is overwritten if it exists.
pub fn run(config: &AppConfig) -> Result<PipelineSummary, ChunkError> {
    let filter = NameFilter::new(&config.scan.include, &config.scan.exclude)?;

    info!("scanning {}", config.scan.root);
    let files = scanner::scan(Path::new(&config.scan.root), config.scan.recursive)?;
    let discovered = files.len();
    info!("discovered {} files", discovered);

    let opts = RecordOptions {
        url_prefix: config.output.url_prefix.clone(),
        add_type_tag: config.tags.add_type_tag,
        extra_tag: config.tags.extra_tag.clone(),
    };

    let mut records = Vec::new();
    for file in &files {
        if !filter.matches(file.file_name()) {
            debug!("filtered out {}", file.rel_name);
            continue;
        }
        records.push(record::build_record(file, &opts));
    }
    let matched = records.len();

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(&config.output.path, json)
        .map_err(|e| ChunkError::io(&config.output.path, e))?;
    info!("wrote {} items to {}", matched, config.output.path);

    Ok(PipelineSummary {
        discovered,
        matched,
        written: matched,
    })
}
