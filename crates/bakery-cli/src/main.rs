use anyhow::Context;
use bakery_advisor::advisor_from_config;
use bakery_catalog::{check_integrity, CatalogRepository, StaticCatalog};
use bakery_cli::cli::{command, recipe_arg};
use bakery_cli::commands::{self, ShowOptions};
use bakery_cli::{AppConfig, Shell};
use bakery_views::{ProductionTab, ViewConfig};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let matches = command().get_matches();
    let scope = matches.subcommand().map_or(&matches, |(_, args)| args);

    init_tracing(scope.get_flag("log-json"));

    let config = AppConfig::from_sources(scope.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let today = scope
        .get_one::<NaiveDate>("today")
        .copied()
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut view_config = config.view_config(today);
    if scope.get_flag("narrow") {
        view_config = view_config.narrow();
    }

    let catalog: Arc<dyn CatalogRepository> = Arc::new(StaticCatalog::sample());
    check_integrity(catalog.as_ref()).log();

    match matches.subcommand() {
        Some(("show", args)) => {
            let options = ShowOptions {
                page: args
                    .get_one::<String>("page")
                    .cloned()
                    .unwrap_or_default(),
                tab: args.get_one::<ProductionTab>("tab").copied(),
                expand: recipe_arg(args, "expand"),
                sidebar: args.get_flag("sidebar"),
            };
            print!("{}", commands::show(catalog.as_ref(), &view_config, &options));
        }
        Some(("cost", args)) => {
            let recipe = recipe_arg(args, "recipe").context("recipe ID is required")?;
            let text = commands::cost(
                catalog.as_ref(),
                &config.costing,
                &recipe,
                args.get_flag("json"),
                args.get_flag("strict"),
            )?;
            print!("{text}");
            if args.get_flag("json") {
                println!();
            }
        }
        Some(("advise", args)) => {
            let recipe = recipe_arg(args, "recipe").context("recipe ID is required")?;
            let advisor = advisor_from_config(&config.advisor)?;
            print!("{}", commands::advise(catalog.as_ref(), advisor.as_ref(), &recipe).await?);
        }
        Some(("forecast", _)) => {
            let advisor = advisor_from_config(&config.advisor)?;
            print!("{}", commands::forecast(catalog.as_ref(), advisor.as_ref()).await?);
        }
        Some(("check", _)) => {
            let (text, clean) = commands::check(catalog.as_ref());
            print!("{text}");
            if !clean {
                return Ok(ExitCode::FAILURE);
            }
        }
        _ => run_interactive(catalog, &config, view_config).await?,
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_interactive(
    catalog: Arc<dyn CatalogRepository>,
    config: &AppConfig,
    view_config: ViewConfig,
) -> anyhow::Result<()> {
    let advisor = advisor_from_config(&config.advisor)?;
    let mut shell = Shell::new(catalog, advisor, view_config);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    shell.run(input, &mut output).await?;
    Ok(())
}
