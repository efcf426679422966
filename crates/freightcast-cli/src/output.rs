use console::{style, StyledObject};
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Kind of one-line status message
#[derive(Debug, Clone, Copy)]
enum Status {
    Success,
    Info,
    Warning,
    Error,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Info => "info",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }

    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Status::Success => style("✓").green().bold(),
            Status::Info => style("ℹ").blue().bold(),
            Status::Warning => style("⚠").yellow().bold(),
            Status::Error => style("✗").red().bold(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Status::Warning | Status::Error)
    }
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn success(&self, message: impl Display) {
        self.status(Status::Success, message);
    }

    pub fn info(&self, message: impl Display) {
        self.status(Status::Info, message);
    }

    pub fn warning(&self, message: impl Display) {
        self.status(Status::Warning, message);
    }

    pub fn error(&self, message: impl Display) {
        self.status(Status::Error, message);
    }

    fn status(&self, status: Status, message: impl Display) {
        let line = match self.format {
            OutputFormat::Human => format!("{} {}", status.marker(), message),
            OutputFormat::Json => {
                json!({ "status": status.label(), "message": message.to_string() }).to_string()
            }
        };
        if status.to_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Rounded table for humans, a `{status, data}` envelope in JSON mode
    pub fn table<T: Tabled + Serialize>(&self, rows: Vec<T>) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human if rows.is_empty() => {
                println!("{}", style("(no data)").dim());
                Ok(())
            }
            OutputFormat::Human => {
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{}", table);
                Ok(())
            }
            OutputFormat::Json => self.result(rows),
        }
    }

    /// Print a value as pretty JSON, enveloped in JSON mode
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let rendered = match self.format {
            OutputFormat::Human => serde_json::to_string_pretty(&data)?,
            OutputFormat::Json => {
                serde_json::to_string_pretty(&json!({ "status": "success", "data": data }))?
            }
        };
        println!("{}", rendered);
        Ok(())
    }

    /// `key: value` line; JSON callers print whole results instead
    pub fn kv(&self, key: impl Display, value: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    pub fn section(&self, title: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}
