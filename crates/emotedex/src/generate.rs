use std::path::PathBuf;

use clap::Args;
use serde_json::{Value, json};

use crate::aggregate::{AggregateMap, finalize_document, merge_locale_manifest};
use crate::error::Result;
use crate::fetch::{CdnClient, DEFAULT_BASE_URL, Endpoints};
use crate::util::{OutputIntegration, output_for, write_string};

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Root of the CDN endpoint templates.
    #[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output artifact; relative paths resolve against the working directory.
    #[arg(long, default_value = "summoner-emotes.json")]
    pub output: PathBuf,

    #[arg(long = "timeout", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// Append one timestamped line per fetch to this file.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub base_url: String,
    pub output: PathBuf,
    pub timeout_seconds: u64,
    pub log_file: Option<PathBuf>,
}

impl From<GenerateArgs> for GenerateConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            base_url: args.base_url,
            output: args.output,
            timeout_seconds: args.timeout_seconds,
            log_file: args.log_file,
        }
    }
}

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    run_generate_with_config(args.into())
}

fn generate_summary_payload(
    config: &GenerateConfig,
    locale_count: usize,
    entry_count: usize,
    integration: &OutputIntegration,
) -> Value {
    json!({
        "command": "generate",
        "status": "ok",
        "base_url": config.base_url,
        "output": config.output.display().to_string(),
        "locales": locale_count,
        "entries": entry_count,
        "integration": integration,
    })
}

/// Runs the whole pipeline: discover locales, fold every locale manifest
/// into the aggregate, then serialize and write the output file. Any fetch
/// or parse failure aborts before anything is written.
pub fn run_generate_with_config(config: GenerateConfig) -> Result<()> {
    let integration = OutputIntegration::detect();
    let ui = output_for(&integration);

    let endpoints = Endpoints::new(&config.base_url);
    let client = CdnClient::new(endpoints, config.timeout_seconds, config.log_file.clone())?;

    ui.rule(Some("emotedex generate"));
    ui.info(&format!("base_url={}", config.base_url));
    ui.info(&format!("output={}", config.output.display()));

    let locales = client.discover_locales()?;
    ui.info(&format!("discovered {} locales", locales.len()));

    let mut aggregate = AggregateMap::new();
    for locale in &locales {
        let entries = client.fetch_manifest(locale)?;
        aggregate = merge_locale_manifest(aggregate, &entries, locale, client.endpoints());
        ui.info(&format!("merged locale {locale} ({} entries)", entries.len()));
    }

    let document = finalize_document(&aggregate)?;
    write_string(&config.output, &document)?;
    ui.success(&format!(
        "wrote {} entries to {}",
        aggregate.len(),
        config.output.display()
    ));

    if integration.should_emit_json() {
        println!(
            "{}",
            generate_summary_payload(&config, locales.len(), aggregate.len(), &integration)
        );
    }

    Ok(())
}

#[derive(Debug, Clone, Args)]
pub struct LocalesArgs {
    #[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long = "timeout", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,
}

/// Prints the locale identifiers the CDN currently publishes, one per line
/// (a JSON array in machine mode).
pub fn run_locales(args: LocalesArgs) -> Result<()> {
    let integration = OutputIntegration::detect();

    let endpoints = Endpoints::new(&args.base_url);
    let client = CdnClient::new(endpoints, args.timeout_seconds, None)?;
    let locales = client.discover_locales()?;

    if integration.should_emit_json() {
        println!(
            "{}",
            json!({
                "command": "locales",
                "status": "ok",
                "locales": locales,
                "integration": integration,
            })
        );
    } else {
        for locale in &locales {
            println!("{locale}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{GenerateArgs, GenerateConfig};
    use crate::util::OutputIntegration;

    fn sample_config() -> GenerateConfig {
        GenerateConfig {
            base_url: "http://fixture".to_string(),
            output: PathBuf::from("/tmp/emotedex/out.json"),
            timeout_seconds: 5,
            log_file: None,
        }
    }

    #[test]
    fn config_from_args_preserves_all_fields() {
        let config: GenerateConfig = GenerateArgs {
            base_url: "http://fixture".to_string(),
            output: PathBuf::from("out.json"),
            timeout_seconds: 7,
            log_file: Some(PathBuf::from("fetch.log")),
        }
        .into();

        assert_eq!(config.base_url, "http://fixture");
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.timeout_seconds, 7);
        assert_eq!(config.log_file, Some(PathBuf::from("fetch.log")));
    }

    #[test]
    fn summary_payload_contains_expected_machine_fields() {
        let integration = OutputIntegration {
            fastapi_mode: "plain".to_string(),
            fastapi_agent: true,
            fastapi_ci: false,
            fastapi_tty: false,
            sqlmodel_mode: "json".to_string(),
            sqlmodel_agent: true,
        };

        let payload = super::generate_summary_payload(&sample_config(), 3, 42, &integration);
        assert_eq!(payload["command"], "generate");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["base_url"], "http://fixture");
        assert_eq!(payload["output"], "/tmp/emotedex/out.json");
        assert_eq!(payload["locales"], 3);
        assert_eq!(payload["entries"], 42);
        assert_eq!(payload["integration"]["sqlmodel_mode"], "json");
    }
}
