use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub tags: TagConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out")]
    pub path: String,
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagConfig {
    #[serde(default)]
    pub add_type_tag: bool,
    #[serde(default)]
    pub extra_tag: Option<String>,
}

fn default_root() -> String {
    ".".to_string()
}

fn default_out() -> String {
    "chunk.json".to_string()
}

fn default_url_prefix() -> String {
    "/".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            root: default_root(),
            recursive: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: default_out(),
            url_prefix: default_url_prefix(),
        }
    }
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
