use crate::core::verify::DetailedDiff;
use crate::domain::model::TransformedRecord;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "event-transform")]
#[command(about = "Flatten finance and address fields out of raw events")]
pub struct CliConfig {
    #[arg(long, help = "JSON file with an event or an array of events")]
    pub input: String,

    #[arg(long, help = "JSON file with the expected transformed output")]
    pub expected: Option<String>,

    #[arg(long, help = "TOML transformation config")]
    pub config: Option<String>,

    #[arg(long, help = "Directory for <name>_output.json and <name>_diff.json")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Pretty-print the output JSON")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &["json"])?;

        if let Some(expected) = &self.expected {
            validate_path("expected", expected)?;
            validate_file_extension("expected", expected, &["json"])?;
        }

        if let Some(config) = &self.config {
            validate_path("config", config)?;
            validate_file_extension("config", config, &["toml"])?;
        }

        if let Some(output_dir) = &self.output_dir {
            validate_path("output_dir", output_dir)?;
        }

        Ok(())
    }
}

/// 讀取 JSON 檔；單一物件會包成只有一筆的陣列
pub fn read_events_file<P: AsRef<Path>>(path: P) -> Result<Vec<serde_json::Value>> {
    let value = read_json_file(path)?;
    Ok(match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    })
}

/// 寫出 `<name>_output.json`，有差異時另外寫 `<name>_diff.json`
pub fn write_test_outputs<P: AsRef<Path>>(
    output_dir: P,
    name: &str,
    records: &[TransformedRecord],
    diff: Option<&DetailedDiff>,
) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();

    let output_path = output_dir.join(format!("{}_output.json", name));
    std::fs::write(&output_path, serde_json::to_string_pretty(records)?)?;
    written.push(output_path);

    if let Some(diff) = diff.filter(|d| !d.is_empty()) {
        let diff_path = output_dir.join(format!("{}_diff.json", name));
        std::fs::write(&diff_path, serde_json::to_string_pretty(diff)?)?;
        written.push(diff_path);
    }

    tracing::debug!("Wrote {} files to {}", written.len(), output_dir.display());
    Ok(written)
}

pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let data = std::fs::read(path.as_ref())?;
    tracing::debug!("Read {} bytes from {}", data.len(), path.as_ref().display());
    Ok(serde_json::from_slice(&data)?)
}
