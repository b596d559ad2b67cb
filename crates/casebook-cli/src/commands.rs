use crate::{
    cli::{AddArgs, Cli, Command, EditArgs, FilterArgs},
    error::CliError,
};
use casebook_core::{
    config::Config,
    error::Error,
    interchange::{encode, encode_one, export_file_name},
    model::{RunOutcome, TestCase},
    query::{SortKey, paginate},
    stats::{aggregate, recent_runs},
    store::{FileBlobStore, ImportGate, ImportOutcome, Store, StoreError, now_timestamp},
};
use std::{fs, num::NonZeroUsize, path::Path};
use tracing::debug;

type CliStore = Store<FileBlobStore>;

/// Execute one command against the configured store.
pub(crate) fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load_or_default(cli.config.as_deref()).map_err(Error::from)?;
    let page_size = config.view.page_size().map_err(Error::from)?;
    let default_sort = config.view.default_sort();
    let data_path = cli.data.unwrap_or(config.storage.data_path);

    debug!(path = %data_path.display(), "opening store");
    let mut store = Store::bootstrap(FileBlobStore::new(data_path));

    let result = match cli.command {
        Command::List { filter, page } => {
            list(&store, &filter, default_sort, page_size, page);
            Ok(())
        }
        Command::Show { id } => show(&store, &id),
        Command::Add(args) => add(&mut store, args),
        Command::Edit(args) => edit(&mut store, args),
        Command::Run { id, outcome } => run_one(&mut store, &id, outcome),
        Command::RunAll { outcome, filter } => {
            run_all(&mut store, &filter, default_sort, outcome);
            Ok(())
        }
        Command::Remove { id } => {
            remove(&mut store, &id);
            Ok(())
        }
        Command::Stats { recent } => {
            stats(&store, recent);
            Ok(())
        }
        Command::Import { file } => import(&mut store, &file),
        Command::Export { id, out } => export(&store, id.as_deref(), &out),
    };

    if let Some(err) = store.error() {
        eprintln!("warning: {err}");
    }

    result
}

fn list(
    store: &CliStore,
    filter: &FilterArgs,
    default_sort: SortKey,
    page_size: NonZeroUsize,
    page: usize,
) {
    let view = filter.query(default_sort).apply(store.records());
    let page = paginate(view.as_slice(), page_size, page);

    for tc in page.items {
        println!(
            "{:<10} {:<8} {:<14} {:<20} {}",
            tc.id,
            tc.status,
            tc.kind,
            tc.last_run_at.as_deref().unwrap_or("-"),
            tc.name
        );
    }
    println!(
        "page {}/{} ({} matching, {} total)",
        page.page,
        page.page_count,
        view.len(),
        store.len()
    );
}

fn show(store: &CliStore, id: &str) -> Result<(), CliError> {
    let tc = find(store, id)?;

    println!("id:        {}", tc.id);
    println!("name:      {}", tc.name);
    println!("status:    {}", tc.status);
    println!("type:      {}", tc.kind);
    println!("last run:  {}", tc.last_run_at.as_deref().unwrap_or("never"));
    println!("tester:    {}", tc.tester_name);
    println!("expected:  {}", tc.expected_result);
    println!("description:\n{}", tc.description);

    Ok(())
}

fn add(store: &mut CliStore, args: AddArgs) -> Result<(), CliError> {
    let tc = TestCase::new(args.id, args.name, args.status, args.kind)
        .with_expected_result(args.expected)
        .with_description(args.description)
        .with_tester_name(args.tester);
    let id = tc.id.clone();

    store.add(tc).map_err(Error::from)?;
    println!("added {id}");

    Ok(())
}

fn edit(store: &mut CliStore, args: EditArgs) -> Result<(), CliError> {
    let id = args.id.clone();
    let patch = args.patch();
    if patch.is_empty() {
        return Err(CliError::EmptyEdit { id });
    }

    store.update(&id, patch).map_err(Error::from)?;
    println!("updated {id}");

    Ok(())
}

fn run_one(store: &mut CliStore, id: &str, outcome: RunOutcome) -> Result<(), CliError> {
    store.mark_run_now(id, outcome).map_err(Error::from)?;
    println!("{id}: {}", outcome.status());

    Ok(())
}

fn run_all(store: &mut CliStore, filter: &FilterArgs, default_sort: SortKey, outcome: RunOutcome) {
    let ids = filter.query(default_sort).apply(store.records()).ids();
    let updated = store.mark_all_run(&ids, outcome, &now_timestamp());

    println!("marked {updated} test case(s) {}", outcome.status());
}

fn remove(store: &mut CliStore, id: &str) {
    match store.remove(id) {
        Some(tc) => println!("removed {} ({})", tc.id, tc.name),
        None => println!("no test case '{id}'"),
    }
}

fn stats(store: &CliStore, recent: usize) {
    let stats = aggregate(store.records());

    println!("total:     {}", stats.total);
    println!("passed:    {}", stats.passed);
    println!("failed:    {}", stats.failed);
    println!("not run:   {}", stats.not_run);
    println!("pass rate: {:.1}%", stats.pass_rate());

    println!("\nby type:");
    for (kind, count) in &stats.by_type {
        println!("  {kind:<14} {count}");
    }

    let runs = recent_runs(store.records(), recent);
    if !runs.is_empty() {
        println!("\nrecent runs:");
        for tc in runs {
            println!(
                "  {:<20} {:<8} {}",
                tc.last_run_at.as_deref().unwrap_or_default(),
                tc.status,
                tc.id
            );
        }
    }
}

fn import(store: &mut CliStore, file: &Path) -> Result<(), CliError> {
    let mut gate = ImportGate::new();
    let ticket = gate.begin();

    let text = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.display().to_string(),
        source,
    })?;

    match gate.complete(ticket, &text, store).map_err(Error::from)? {
        ImportOutcome::Applied { count } => println!("imported {count} test case(s)"),
        ImportOutcome::Stale => println!("import superseded, nothing applied"),
    }

    Ok(())
}

fn export(store: &CliStore, id: Option<&str>, out: &Path) -> Result<(), CliError> {
    let text = match id {
        Some(id) => encode_one(find(store, id)?),
        None => encode(store.records()),
    }
    .map_err(Error::from)?;

    let path = out.join(export_file_name(id));
    fs::write(&path, text).map_err(|source| CliError::Write {
        path: path.display().to_string(),
        source,
    })?;
    println!("wrote {}", path.display());

    Ok(())
}

fn find<'a>(store: &'a CliStore, id: &str) -> Result<&'a TestCase, CliError> {
    store.get(id).ok_or_else(|| {
        Error::from(StoreError::NotFound { id: id.to_string() }).into()
    })
}
