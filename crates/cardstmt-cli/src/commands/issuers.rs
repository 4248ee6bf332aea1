//! Issuers command - list supported issuer profiles.

use clap::Args;
use console::style;

use cardstmt_core::statement::profiles::PROFILES;

/// Arguments for the issuers command.
#[derive(Args)]
pub struct IssuersArgs {
    /// Show keyword and pattern counts per issuer
    #[arg(long)]
    detailed: bool,
}

pub async fn run(args: IssuersArgs) -> anyhow::Result<()> {
    println!("{} Supported issuers:", style("ℹ").blue());

    for profile in PROFILES.iter() {
        if args.detailed {
            let field_patterns = profile.card_number.len()
                + profile.billing_cycle.len()
                + profile.due_date.len()
                + profile.total_balance.len();

            let table = if profile.table.is_some() {
                ", transaction table"
            } else {
                ""
            };

            println!(
                "  {} ({} keywords, {} field patterns{})",
                profile.name,
                profile.keywords.len(),
                field_patterns,
                table
            );
        } else {
            println!("  {}", profile.name);
        }
    }

    Ok(())
}
