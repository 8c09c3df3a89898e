//! vdxfid: print the VDXF identifier or data key of a name.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vdxf::{Identifier, Vdxf, VdxfConfig};

/// Derive VDXF identifiers from names
#[derive(Parser, Debug)]
#[command(name = "vdxfid")]
#[command(version, about, long_about = None)]
struct Args {
    /// Name to derive, e.g. `alice.vrsc` or `currency.export.system@vrsc`
    name: String,

    /// Parent identifier (hex) to scope the name under
    #[arg(long, conflicts_with = "data_key")]
    parent: Option<String>,

    /// Derive a data key inside a namespace instead of a plain identifier
    #[arg(long)]
    data_key: bool,

    /// Namespace identifier (hex) for --data-key; defaults to the root chain
    #[arg(long, requires = "data_key")]
    namespace: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    name: String,
    clean_name: String,
    chain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<Identifier>,
    id: Identifier,
}

fn parse_identifier(hex: &str, what: &str) -> Result<Identifier> {
    Identifier::from_hex(hex).with_context(|| format!("invalid {what} identifier {hex:?}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => VdxfConfig::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => VdxfConfig::default(),
    };
    let vdxf = Vdxf::new(config).context("failed to build vdxf context")?;

    let parent = args
        .parent
        .as_deref()
        .map(|hex| parse_identifier(hex, "parent"))
        .transpose()?
        .unwrap_or(Identifier::NULL);

    let parsed = vdxf.parse(&args.name, false)?;
    let cleaned = vdxf.clean_name(&args.name, parent)?;

    let output = if args.data_key {
        let namespace = args
            .namespace
            .as_deref()
            .map(|hex| parse_identifier(hex, "namespace"))
            .transpose()?
            .unwrap_or_else(|| vdxf.root_chain().id());
        Output {
            name: args.name.clone(),
            clean_name: cleaned.name,
            chain: parsed.chain().to_string(),
            parent: None,
            namespace: Some(namespace),
            id: vdxf.get_data_key(&args.name, namespace)?,
        }
    } else {
        let (id, folded) = vdxf.get_id_with_parent(&args.name, parent)?;
        Output {
            name: args.name.clone(),
            clean_name: cleaned.name,
            chain: parsed.chain().to_string(),
            parent: (!folded.is_null()).then_some(folded),
            namespace: None,
            id,
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.id);
        println!("name:      {}", output.clean_name);
        if !output.chain.is_empty() {
            println!("chain:     {}", output.chain);
        }
        if let Some(parent) = output.parent {
            println!("parent:    {parent}");
        }
        if let Some(namespace) = output.namespace {
            println!("namespace: {namespace}");
        }
    }

    Ok(())
}
