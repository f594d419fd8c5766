use clap::Parser;
use event_transform::config::cli::{read_events_file, read_json_file, write_test_outputs};
use event_transform::utils::{
    error::TransformError,
    logger,
    validation::{validate_required_field, Validate},
};
use event_transform::{verify_outputs, CliConfig, Result, StandardEventTransformer, TransformConfig};

const EXIT_MISMATCH: i32 = 1;

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting event-transform CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_MISMATCH),
        Err(e) => {
            tracing::error!("❌ event-transform failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// 回傳 `false` 代表輸出與預期不符
fn run(cli: &CliConfig) -> Result<bool> {
    // 驗證配置
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => {
            let config = TransformConfig::from_file(path).map_err(|e| {
                TransformError::ConfigValidationError {
                    field: "config".to_string(),
                    message: format!("{}: {}", path, e),
                }
            })?;
            config.validate()?;
            config
        }
        None => TransformConfig::default(),
    };

    if config.verification_enabled() {
        validate_required_field("expected", &cli.expected)?;
    }

    tracing::info!("Running transformation '{}'", config.name());
    let transformer = StandardEventTransformer::from_config(&config);

    let events = read_events_file(&cli.input)?;
    let metadata = serde_json::Value::Null;
    let records = transformer.transform_batch(&events, &metadata)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{}", output);

    let report = match &cli.expected {
        Some(expected_path) => {
            let expected = read_json_file(expected_path)?;
            Some((expected_path, verify_outputs(&expected, &records)?))
        }
        None => None,
    };

    if let Some(output_dir) = &cli.output_dir {
        let diff = report.as_ref().map(|(_, r)| &r.diff);
        let written = write_test_outputs(output_dir, config.name(), &records, diff)?;
        tracing::info!("📁 Wrote {} test output files to {}", written.len(), output_dir);
    }

    match report {
        Some((expected_path, report)) if !report.passed => {
            eprintln!("❌ Output does not match {}", expected_path);
            eprintln!("{}", serde_json::to_string_pretty(&report.diff)?);
            Ok(false)
        }
        Some((expected_path, _)) => {
            eprintln!("✅ Output matches {}", expected_path);
            Ok(true)
        }
        None => Ok(true),
    }
}
