//! holidays CLI entry point.

use anyhow::bail;
use chrono::{Datelike, Local};
use clap::Parser;
use holidays_client::cli::{Cli, Commands, OutputFormat};
use holidays_client::config::Config;
use holidays_client::output::{format_output, pretty};
use holidays_client::{browse, HolidayApp, HolidayClient};
use holidays_core::holiday::{materialize, month_view};
use holidays_core::selection::Selection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "holidays_client=warn"
    } else {
        "holidays_client=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url.clone() {
        config.base_url = base_url;
    }
    let client = HolidayClient::from_config(&config)?;
    tracing::debug!(base_url = client.base_url(), "Client ready");

    match cli.command {
        Commands::Countries => {
            let countries = client.fetch_countries().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&countries, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_countries(&countries)),
            }
        }
        Commands::Subdivisions { country } => {
            let subdivisions = client.fetch_subdivisions(&country).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&subdivisions, cli.format)),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_subdivisions(&subdivisions))
                }
            }
        }
        Commands::Holidays(args) => {
            let query = args
                .to_selection(&config.default_country)
                .holiday_query()?;
            let records = client.fetch_holidays_query(&query).await?;
            let events = materialize(&records);
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
            }
        }
        Commands::Calendar(args) => {
            let today = Local::now().date_naive();
            let year = args.year.unwrap_or(today.year());
            let month = args.month.unwrap_or(today.month());

            let selection = args.selection.to_selection(&config.default_country);
            let mut app = HolidayApp::new(client, selection);
            app.refresh().await;
            if let Some(notice) = &app.view().notice {
                bail!("{notice}");
            }

            let Some(grid) = month_view(year, month, &app.view().events) else {
                bail!("Invalid month {year}-{month}");
            };
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&grid, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_page(app.view(), &grid)),
            }
        }
        Commands::Export(args) => {
            let out_dir = args.out_dir.unwrap_or_else(|| config.export_dir.clone());
            let selection = args.selection.to_selection(&config.default_country);

            let mut app = HolidayApp::new(client, selection);
            app.refresh().await;
            if let Some(notice) = &app.view().notice {
                bail!("{notice}");
            }

            let Some(path) = app.export(args.format, &out_dir) else {
                bail!("{}", app.view().notice.clone().unwrap_or_default());
            };
            if !cli.quiet {
                println!("Saved {}", path.display());
            }
        }
        Commands::Browse => {
            let selection = Selection::new(config.default_country.clone());
            let mut app = HolidayApp::new(client, selection);
            browse::run(&mut app, &config.export_dir).await?;
        }
    }

    Ok(())
}
