//! Command-line definition

use bakery_catalog::RecipeId;
use bakery_views::ProductionTab;
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Build the `bakery` command
#[must_use]
pub fn command() -> Command {
    Command::new("bakery")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Aisha Bakery operations console")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file (default: $BAKERY_CONFIG)"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .value_parser(parse_date)
                .help("Reference date for lot expiry, YYYY-MM-DD (default: local date)"),
        )
        .arg(
            Arg::new("narrow")
                .long("narrow")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Hide the sidebar unless opened"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            Command::new("show")
                .about("Render one page")
                .arg(
                    Arg::new("page")
                        .default_value("dashboard")
                        .help("dashboard | production | inventory | blueprint | settings"),
                )
                .arg(
                    Arg::new("tab")
                        .long("tab")
                        .value_parser(parse_tab)
                        .help("Production tab: recipes | schedule"),
                )
                .arg(
                    Arg::new("expand")
                        .long("expand")
                        .help("Recipe ID to expand"),
                )
                .arg(
                    Arg::new("sidebar")
                        .long("sidebar")
                        .action(ArgAction::SetTrue)
                        .help("Open the sidebar"),
                ),
        )
        .subcommand(
            Command::new("cost")
                .about("Print the cost breakdown of a recipe")
                .arg(Arg::new("recipe").required(true).help("Recipe ID"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail on unresolved ingredients or zero yield"),
                ),
        )
        .subcommand(
            Command::new("advise")
                .about("Ask the AI chef how to lower a recipe's cost")
                .arg(Arg::new("recipe").required(true).help("Recipe ID")),
        )
        .subcommand(Command::new("forecast").about("Forecast demand for the next 3 days"))
        .subcommand(Command::new("check").about("Check catalog cross-references"))
        .subcommand(Command::new("interactive").about("Interactive console (default)"))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_tab(value: &str) -> Result<ProductionTab, String> {
    ProductionTab::parse(value).ok_or_else(|| "expected recipes or schedule".to_string())
}

/// Recipe ID argument of a subcommand
#[must_use]
pub fn recipe_arg(args: &ArgMatches, name: &str) -> Option<RecipeId> {
    args.get_one::<String>(name).map(|id| RecipeId::new(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn parses_show_options() {
        let matches = command()
            .try_get_matches_from([
                "bakery", "show", "production", "--tab", "schedule", "--today", "2023-10-29",
            ])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "show");
        assert_eq!(args.get_one::<String>("page").map(String::as_str), Some("production"));
        assert_eq!(args.get_one::<ProductionTab>("tab"), Some(&ProductionTab::Schedule));
        assert_eq!(
            args.get_one::<NaiveDate>("today"),
            NaiveDate::from_ymd_opt(2023, 10, 29).as_ref()
        );
    }

    #[test]
    fn rejects_bad_date_and_tab() {
        assert!(command()
            .try_get_matches_from(["bakery", "--today", "29/10/2023", "check"])
            .is_err());
        assert!(command()
            .try_get_matches_from(["bakery", "show", "production", "--tab", "kanban"])
            .is_err());
    }

    #[test]
    fn cost_requires_recipe() {
        assert!(command().try_get_matches_from(["bakery", "cost"]).is_err());
        let matches = command()
            .try_get_matches_from(["bakery", "cost", "RCP-001", "--strict"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(recipe_arg(args, "recipe"), Some(RecipeId::new("RCP-001")));
        assert!(args.get_flag("strict"));
    }
}
