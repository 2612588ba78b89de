use chunker_core::config::{AppConfig, OutputConfig, ScanConfig, TagConfig};
use chunker_core::pipeline;
use std::fs;
use tempfile::tempdir;

fn base_config(root: &std::path::Path, out: &std::path::Path) -> AppConfig {
    AppConfig {
        scan: ScanConfig {
            root: root.to_string_lossy().into_owned(),
            recursive: false,
            include: vec![],
            exclude: vec![],
        },
        output: OutputConfig {
            path: out.to_string_lossy().into_owned(),
            url_prefix: "/files/".to_string(),
        },
        tags: TagConfig {
            add_type_tag: true,
            extra_tag: Some("fixture".to_string()),
        },
    }
}

#[test]
fn full_pipeline_writes_expected_chunk() {
    // 1. Fixture directory
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("src");
    fs::create_dir_all(&src_dir).unwrap();
    fs::write(src_dir.join("Holiday_Snaps.jpg"), "fake_image_bytes").unwrap();
    fs::write(src_dir.join("notes.txt"), "This is a document.").unwrap();
    fs::write(src_dir.join("scratch.tmp"), "ignore me").unwrap();

    let out = temp.path().join("chunk.json");
    let mut cfg = base_config(&src_dir, &out);
    cfg.scan.exclude = vec!["*.tmp".to_string()];

    // 2. Run and parse the emitted chunk
    let summary = pipeline::run(&cfg).unwrap();
    assert_eq!(summary.discovered, 3);
    assert_eq!(summary.written, 2);

    let body = fs::read_to_string(&out).unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(items.len(), 2);

    // Sorted by lowercase name: Holiday_Snaps.jpg before notes.txt
    let snap = &items[0];
    assert_eq!(snap["id"], "holiday-snaps");
    assert_eq!(snap["title"], "Holiday Snaps");
    assert_eq!(snap["url"], "/files/Holiday_Snaps.jpg");
    assert_eq!(snap["type"], "image");
    assert_eq!(snap["size"], 16);
    assert_eq!(
        snap["tags"],
        serde_json::json!(["image", "fixture"])
    );
    assert!(snap["created"].as_str().unwrap().len() == 10);
    assert_eq!(snap["description"], "");

    let notes = &items[1];
    assert_eq!(notes["type"], "md");
    assert_eq!(notes["url"], "/files/notes.txt");
}

#[test]
fn recursive_scan_includes_subdirectory_paths() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("src");
    fs::create_dir_all(src_dir.join("packs")).unwrap();
    fs::write(src_dir.join("packs/bundle.zip"), "zipzip").unwrap();
    fs::write(src_dir.join("top.pdf"), "%PDF").unwrap();

    let out = temp.path().join("chunk.json");
    let mut cfg = base_config(&src_dir, &out);
    cfg.scan.recursive = true;
    cfg.output.url_prefix = "/zips".to_string();
    cfg.tags = TagConfig::default();

    let summary = pipeline::run(&cfg).unwrap();
    assert_eq!(summary.written, 2);

    let items: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(items[0]["url"], "/zips/packs/bundle.zip");
    assert_eq!(items[0]["type"], "zip");
    assert_eq!(items[1]["url"], "/zips/top.pdf");
    assert!(items[0]["tags"].as_array().unwrap().is_empty());
}

#[test]
fn include_patterns_limit_the_chunk() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("src");
    fs::create_dir_all(&src_dir).unwrap();
    fs::write(src_dir.join("keep.pdf"), "%PDF").unwrap();
    fs::write(src_dir.join("skip.mp3"), "ID3").unwrap();

    let out = temp.path().join("chunk.json");
    let mut cfg = base_config(&src_dir, &out);
    cfg.scan.include = vec!["*.pdf".to_string()];
    cfg.tags = TagConfig::default();

    let summary = pipeline::run(&cfg).unwrap();
    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.written, 1);

    let items: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(items[0]["id"], "keep");
}

#[test]
fn rerun_overwrites_previous_output() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("src");
    fs::create_dir_all(&src_dir).unwrap();
    fs::write(src_dir.join("one.md"), "# one").unwrap();

    let out = temp.path().join("chunk.json");
    fs::write(&out, "stale garbage").unwrap();

    let cfg = base_config(&src_dir, &out);
    pipeline::run(&cfg).unwrap();

    let items: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "one");
}
