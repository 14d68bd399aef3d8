//! Interactive selection session.
//!
//! A session owns exactly one [`SelectionSet`], created empty when the
//! session starts and dropped when it ends. Commands arrive one per line;
//! a failed command is reported and the session keeps going.

use crate::browse::{find_category, render_category, render_overview};
use chrono::NaiveDateTime;
use mt_catalog::Catalog;
use mt_common::{Error, RecommendationId, Result, SessionId};
use mt_report::generate_report;
use mt_selection::{clear_selection, toggle_selection, SelectionSet, ToggleOutcome};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

pub const HELP: &str = "\
Commands:
  select <ID>      add a recommendation (e.g. select NOUN_analysis_0_0)
  deselect <ID>    remove a recommendation
  list             show selected recommendations in order
  count            number of selected recommendations
  clear            remove every selection
  report           print the report for the current selection
  catalog          list every analysis type
  show <KEY>       review one analysis type (e.g. show VERB)
  help             this text
  quit | exit      end the session
";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Select(RecommendationId),
    Deselect(RecommendationId),
    List,
    Count,
    Clear,
    Report,
    Catalog,
    Show(String),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for SessionCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(Error::InvalidArgument(format!(
                "unexpected argument '{}' after '{}'",
                extra, verb
            )));
        }

        let required = |name: &str| {
            arg.ok_or_else(|| Error::InvalidArgument(format!("'{}' needs an argument", name)))
        };
        let no_arg = |command: SessionCommand| match arg {
            Some(extra) => Err(Error::InvalidArgument(format!(
                "'{}' takes no argument, got '{}'",
                verb, extra
            ))),
            None => Ok(command),
        };

        match verb.as_str() {
            "select" => Ok(SessionCommand::Select(required("select")?.parse()?)),
            "deselect" => Ok(SessionCommand::Deselect(required("deselect")?.parse()?)),
            "show" => Ok(SessionCommand::Show(required("show")?.to_string())),
            "list" => no_arg(SessionCommand::List),
            "count" => no_arg(SessionCommand::Count),
            "clear" => no_arg(SessionCommand::Clear),
            "report" => no_arg(SessionCommand::Report),
            "catalog" => no_arg(SessionCommand::Catalog),
            "help" => no_arg(SessionCommand::Help),
            "quit" | "exit" => no_arg(SessionCommand::Quit),
            _ => Err(Error::UnknownCommand(verb.clone())),
        }
    }
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Text(String),
    Quit,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub errors: usize,
    pub selected: usize,
}

pub struct Session<'a> {
    id: SessionId,
    catalog: &'a Catalog,
    selection: SelectionSet,
    now: Option<NaiveDateTime>,
}

impl<'a> Session<'a> {
    /// Start a session with an empty selection.
    ///
    /// `now` pins the report timestamp; without it the local clock is read
    /// each time a report is generated.
    pub fn new(catalog: &'a Catalog, now: Option<NaiveDateTime>) -> Self {
        let id = SessionId::new();
        debug!(session_id = %id, "Session created");
        Session {
            id,
            catalog,
            selection: SelectionSet::new(),
            now,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    fn report_time(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    fn toggle(&mut self, id: &RecommendationId, selected: bool) -> Result<String> {
        let outcome = toggle_selection(self.catalog, &mut self.selection, id, selected)?;
        let choice = self
            .catalog
            .lookup(id)
            .map(|rec| rec.choice.as_str())
            .unwrap_or_default();
        Ok(match outcome {
            ToggleOutcome::Inserted => format!("selected {}: {}", id, choice),
            ToggleOutcome::AlreadySelected => format!("already selected {}", id),
            ToggleOutcome::Removed => format!("deselected {}: {}", id, choice),
            ToggleOutcome::NotSelected => format!("not selected {}", id),
        })
    }

    fn render_list(&self) -> String {
        if self.selection.is_empty() {
            return "no recommendations selected".to_string();
        }
        self.selection
            .list()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{}. {}  {}  [{}]",
                    i + 1,
                    entry.id,
                    entry.snapshot.choice,
                    entry.snapshot.ud_format()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Execute one command against this session's selection.
    pub fn execute(&mut self, command: SessionCommand) -> Result<Response> {
        let text = match command {
            SessionCommand::Select(id) => self.toggle(&id, true)?,
            SessionCommand::Deselect(id) => self.toggle(&id, false)?,
            SessionCommand::List => self.render_list(),
            SessionCommand::Count => format!("{} selected", self.selection.count()),
            SessionCommand::Clear => {
                let cleared = self.selection.count();
                clear_selection(&mut self.selection);
                format!("cleared {} selections", cleared)
            }
            SessionCommand::Report => generate_report(self.selection.list(), self.report_time()),
            SessionCommand::Catalog => render_overview(self.catalog),
            SessionCommand::Show(key) => {
                let category = find_category(self.catalog, &key)?;
                render_category(category, Some(&self.selection))
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Ok(Response::Quit),
        };
        Ok(Response::Text(text))
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command failures are written to `output` as `error: <message>` and
    /// counted; only I/O failures on the streams themselves end the run
    /// with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<SessionSummary> {
        info!(session_id = %self.id, "Session started");
        writeln!(
            output,
            "morphtag session {} (type 'help' for commands)",
            self.id
        )?;

        let mut summary = SessionSummary::default();
        for line in input.lines() {
            let line = line?;
            let command = match SessionCommand::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    summary.errors += 1;
                    warn!(session_id = %self.id, error = %err, "Rejected session input");
                    writeln!(output, "error: {}", err)?;
                    continue;
                }
            };

            summary.commands += 1;
            match self.execute(command) {
                Ok(Response::Text(text)) => {
                    output.write_all(text.as_bytes())?;
                    if !text.ends_with('\n') {
                        output.write_all(b"\n")?;
                    }
                }
                Ok(Response::Quit) => break,
                Err(err) => {
                    summary.errors += 1;
                    warn!(session_id = %self.id, error = %err, "Session command failed");
                    writeln!(output, "error: {}", err)?;
                }
            }
            output.flush()?;
        }

        summary.selected = self.selection.count();
        info!(
            session_id = %self.id,
            commands = summary.commands,
            errors = summary.errors,
            selected = summary.selected,
            "Session ended"
        );
        Ok(summary)
    }
}
