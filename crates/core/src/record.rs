use crate::classifier;
use crate::models::ItemRecord;
use crate::naming;
use crate::scanner::ScannedFile;
use chrono::{Local, TimeZone};

#[derive(Debug, Clone, Default)]
pub struct RecordOptions {
    pub url_prefix: String,
    pub add_type_tag: bool,
    pub extra_tag: Option<String>,
}

/// Assembles one item record from a scanned file.
pub fn build_record(file: &ScannedFile, opts: &RecordOptions) -> ItemRecord {
    let stem = file
        .file_name()
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|s| !s.is_empty())
        .unwrap_or(file.file_name())
        .to_string();
    let kind = classifier::classify(&file.path);

    let mut tags = Vec::new();
    if opts.add_type_tag {
        tags.push(kind.as_str().to_string());
    }
    if let Some(extra) = &opts.extra_tag {
        if !extra.is_empty() {
            tags.push(extra.clone());
        }
    }

    ItemRecord {
        id: naming::slugify(&stem),
        title: naming::humanize_title(&stem),
        description: String::new(),
        note: String::new(),
        url: join_url(&opts.url_prefix, &file.rel_name),
        kind: kind.as_str().to_string(),
        size: file.size,
        tags,
        created: format_created(file.mtime),
    }
}

/// Joins the url prefix and relative name: no doubled slashes, always a
/// leading slash.
pub fn join_url(prefix: &str, rel_name: &str) -> String {
    let joined = format!("{}/{}", prefix.trim_end_matches('/'), rel_name);
    let mut url = joined.replace("//", "/");
    if !url.starts_with('/') {
        url.insert(0, '/');
    }
    url
}

fn format_created(mtime: i64) -> String {
    Local
        .timestamp_opt(mtime, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
