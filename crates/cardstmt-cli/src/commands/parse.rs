//! Parse command - extract data from a single statement file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardstmt_core::models::statement::ParseResponse;
use cardstmt_core::service::StatementService;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF, or a plain-text statement dump)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Parsing file: {}", args.input.display());

    let service = StatementService::with_config(config);
    let response = match extension.as_str() {
        "pdf" => {
            let data = fs::read(&args.input)?;
            service
                .parse(&data, "application/pdf")
                .map_err(|e| anyhow::anyhow!("{} (status {})", e, e.status()))?
        }
        "txt" => {
            let text = fs::read_to_string(&args.input)?;
            service.parse_text(&text)
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    let output = format_response(&response, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_response(
    response: &ParseResponse,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if pretty {
                Ok(serde_json::to_string_pretty(response)?)
            } else {
                Ok(serde_json::to_string(response)?)
            }
        }
        OutputFormat::Text => Ok(format_text(response)),
    }
}

fn format_text(response: &ParseResponse) -> String {
    let mut output = String::new();

    output.push_str(&format!("Issuer:         {}\n", response.issuer));
    output.push_str(&format!("Card number:    {}\n", response.card_number));
    output.push_str(&format!("Billing cycle:  {}\n", response.billing_cycle));
    output.push_str(&format!("Due date:       {}\n", response.due_date));
    output.push_str(&format!("Total balance:  {}\n", response.total_balance));
    output.push('\n');

    if response.transactions.is_empty() {
        output.push_str("No transactions found.\n");
    } else {
        output.push_str(&format!("Transactions ({}):\n", response.transactions.len()));
        for txn in &response.transactions {
            output.push_str(&format!(
                "  {}  {:>16}  {}\n",
                txn.date, txn.amount, txn.description
            ));
        }
    }

    output
}
