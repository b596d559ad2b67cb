use casebook_core::{
    model::{CaseKind, RunOutcome, Status, TestCasePatch},
    query::{ALL, Query, SortKey},
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "casebook", version, about = "Keep a register of manual test cases")]
pub(crate) struct Cli {
    /// TOML config file.
    #[arg(long, global = true, env = "CASEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON data file; overrides `storage.data_path`.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List test cases, one page at a time.
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show every field of one test case.
    Show { id: String },

    /// Add a new test case.
    Add(AddArgs),

    /// Change fields of an existing test case.
    Edit(EditArgs),

    /// Record a manual run.
    Run { id: String, outcome: RunOutcome },

    /// Record the same run result for every test case in a view.
    RunAll {
        outcome: RunOutcome,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Delete a test case.
    Remove { id: String },

    /// Print totals, per-type counts and recent runs.
    Stats {
        #[arg(long, default_value_t = 5)]
        recent: usize,
    },

    /// Replace the collection with the contents of a CSV file.
    Import { file: PathBuf },

    /// Write the collection, or one test case, as CSV.
    Export {
        #[arg(long)]
        id: Option<String>,

        /// Directory the file is written to.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

///
/// FilterArgs
///

#[derive(Args, Debug)]
pub(crate) struct FilterArgs {
    #[arg(long, default_value = ALL)]
    pub status: String,

    #[arg(long = "type", default_value = ALL)]
    pub kind: String,

    /// Case-insensitive substring of the name.
    #[arg(long, default_value = "")]
    pub search: String,

    /// `name` or `lastRunAt`; the configured default when omitted.
    #[arg(long)]
    pub sort: Option<String>,
}

impl FilterArgs {
    pub(crate) fn query(&self, default_sort: SortKey) -> Query {
        let query = Query::from_params(&self.status, &self.kind, &self.search, "");

        match &self.sort {
            Some(sort) => query.sort(SortKey::parse(sort)),
            None => query.sort(default_sort),
        }
    }
}

///
/// AddArgs
///

#[derive(Args, Debug)]
pub(crate) struct AddArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "not_run")]
    pub status: Status,

    #[arg(long = "type", default_value = "identification")]
    pub kind: CaseKind,

    #[arg(long, default_value = "")]
    pub expected: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub tester: String,
}

///
/// EditArgs
///

#[derive(Args, Debug)]
pub(crate) struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long = "type")]
    pub kind: Option<CaseKind>,

    #[arg(long)]
    pub expected: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub tester: Option<String>,
}

impl EditArgs {
    pub(crate) fn patch(self) -> TestCasePatch {
        TestCasePatch {
            name: self.name,
            status: self.status,
            kind: self.kind,
            expected_result: self.expected,
            description: self.description,
            tester_name: self.tester,
            last_run_at: None,
        }
    }
}
