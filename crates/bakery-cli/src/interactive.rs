//! Line-driven console session
//!
//! Reads one command per line, applies it to the UI state and re-renders.
//! `optimize` starts the advisory request in the background; at most one
//! is outstanding and later renders pick up its result.

use bakery_advisor::{Advisor, AdvisorError};
use bakery_catalog::{CatalogRepository, RecipeId};
use bakery_views::{render, Page, ProductionTab, UiState, ViewConfig};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

/// Command help text
pub const HELP: &str = "\
Commands:
  go <page>                  dashboard | production | inventory | blueprint | settings
  tab <recipes|schedule>     switch production tab
  expand <recipe-id>         expand or collapse a recipe
  sidebar                    open or close the sidebar
  optimize                   ask the AI chef about the expanded recipe
  reset                      clear the AI chef panel
  help                       show this help
  quit                       leave
";

const STILL_WORKING: &str = "the AI chef is still working";

/// Parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Navigate to a page ID
    Go(String),
    /// Switch production tab
    Tab(ProductionTab),
    /// Toggle a recipe
    Expand(RecipeId),
    /// Toggle sidebar
    Sidebar,
    /// Start an advisory request
    Optimize,
    /// Reset the advisory panel
    Reset,
    /// Print help
    Help,
    /// Re-render only
    Refresh,
    /// Leave
    Quit,
}

impl ShellCommand {
    /// Parse one input line
    ///
    /// # Errors
    /// A message describing the unknown command or missing argument
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Refresh);
        };
        let arg = words.next();
        match (verb.to_ascii_lowercase().as_str(), arg) {
            ("go", Some(page)) => Ok(Self::Go(page.to_string())),
            ("tab", Some(tab)) => ProductionTab::parse(tab)
                .map(Self::Tab)
                .ok_or_else(|| format!("unknown tab `{tab}`, expected recipes or schedule")),
            ("expand", Some(id)) => Ok(Self::Expand(RecipeId::new(id))),
            ("go" | "tab" | "expand", None) => Err(format!("`{verb}` needs an argument")),
            ("sidebar", _) => Ok(Self::Sidebar),
            ("optimize", _) => Ok(Self::Optimize),
            ("reset", _) => Ok(Self::Reset),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "exit" | "q", _) => Ok(Self::Quit),
            _ => Err(format!("unknown command `{verb}`, type `help`")),
        }
    }
}

/// Interactive console session
pub struct Shell {
    catalog: Arc<dyn CatalogRepository>,
    advisor: Arc<dyn Advisor>,
    config: ViewConfig,
    state: UiState,
    pending: Option<JoinHandle<()>>,
}

impl Shell {
    /// Create session on the dashboard
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>, advisor: Arc<dyn Advisor>, config: ViewConfig) -> Self {
        Self {
            catalog,
            advisor,
            config,
            state: UiState::new(),
            pending: None,
        }
    }

    /// Current UI state
    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Current screen
    #[must_use]
    pub fn screen(&self) -> String {
        render(self.catalog.as_ref(), &self.config, &self.state)
    }

    /// Apply one command; returns a status line, if any
    pub fn apply(&mut self, command: ShellCommand) -> Option<String> {
        match command {
            ShellCommand::Go(id) => {
                let page = self.state.navigate_to(&id);
                (page.id() != id)
                    .then(|| format!("unknown page `{id}`, showing {}", page.label()))
            }
            ShellCommand::Tab(tab) => {
                self.state.navigate(Page::Production);
                self.state.set_tab(tab);
                None
            }
            ShellCommand::Expand(id) => {
                if self.catalog.recipe(&id).is_none() {
                    return Some(format!("no recipe `{id}`"));
                }
                self.state.navigate(Page::Production);
                self.state.set_tab(ProductionTab::Recipes);
                self.state.toggle_recipe(&id);
                None
            }
            ShellCommand::Sidebar => {
                self.state.toggle_sidebar();
                None
            }
            ShellCommand::Optimize => self.optimize(),
            ShellCommand::Reset => self
                .state
                .advisory()
                .reset()
                .err()
                .map(|_| STILL_WORKING.to_string()),
            ShellCommand::Help => Some(HELP.to_string()),
            ShellCommand::Refresh | ShellCommand::Quit => None,
        }
    }

    fn optimize(&mut self) -> Option<String> {
        let Some(id) = self.state.expanded_recipe().cloned() else {
            return Some("expand a recipe first".to_string());
        };
        let Some(recipe) = self.catalog.recipe(&id).cloned() else {
            return Some(format!("no recipe `{id}`"));
        };
        let session = self.state.advisory().clone();
        if let Err(err) = session.begin(&id) {
            return Some(match err {
                AdvisorError::RequestInFlight => STILL_WORKING.to_string(),
                other => other.to_string(),
            });
        }

        let catalog = Arc::clone(&self.catalog);
        let advisor = Arc::clone(&self.advisor);
        self.pending = Some(tokio::spawn(async move {
            let result = advisor.optimize_recipe(&recipe, catalog.ingredients()).await;
            session.complete(result);
        }));
        Some(format!("asking the {} advisor...", self.advisor.name()))
    }

    /// Wait for the outstanding advisory request, if any
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(err) = handle.await {
                tracing::error!(error = %err, "advisory task failed");
            }
        }
    }

    /// Run until `quit` or end of input
    ///
    /// # Errors
    /// Reading input or writing output failed
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        write!(output, "{}", self.screen())?;
        writeln!(output, "Type `help` for commands.")?;
        output.flush()?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(output, "{message}")?;
                    continue;
                }
            };
            if command == ShellCommand::Quit {
                break;
            }
            let status = self.apply(command);
            write!(output, "{}", self.screen())?;
            if let Some(status) = status {
                writeln!(output, "{}", status.trim_end())?;
            }
            output.flush()?;
        }

        if self.pending.is_some() {
            self.settle().await;
            write!(output, "{}", self.screen())?;
        }
        output.flush()
    }
}
