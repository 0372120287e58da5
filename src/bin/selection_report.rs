use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Deserialize;

use vela_core::helpers::{elide, format_relative_time};
use vela_core::{
    FrontendSettings, SelectionEntry, SelectionInfo, SelectionList, SelectionPool, SelectionView,
    UiStatus, load_frontend_settings, load_selection_snapshot_from_disk,
    save_selection_snapshot_to_disk,
};

#[derive(Deserialize)]
struct ManifestSelection {
    name: String,
    #[serde(default)]
    summary: String,
    order: i64,
    #[serde(default)]
    packages: Vec<String>,
    status: Option<String>,
}

#[derive(Deserialize)]
struct SelectionManifest {
    #[serde(default)]
    selection: Vec<ManifestSelection>,
}

#[derive(Default)]
struct ReportSurface {
    rows: Vec<SelectionEntry>,
}

impl SelectionView for ReportSurface {
    fn refresh_start(&mut self) {
        self.rows.clear();
    }

    fn refresh_match(&mut self, entry: SelectionEntry) {
        self.rows.push(entry);
    }

    fn refresh_finished(&mut self) {}

    fn visible(&self) -> bool {
        true
    }

    fn active_entry(&self) -> Option<SelectionEntry> {
        self.rows.first().cloned()
    }
}

struct ReportArgs {
    manifest: Option<PathBuf>,
    set: Option<(String, UiStatus)>,
}

fn parse_args() -> Result<ReportArgs> {
    let mut manifest = None;
    let mut set = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--set" => {
                let name = args.next().context("--set expects a selection name")?;
                let key = args.next().context("--set expects a status key")?;
                let status = UiStatus::from_key(&key).with_context(|| {
                    format!("unknown status '{}'; known keys: {}", key, known_status_keys())
                })?;
                set = Some((name, status));
            }
            other if manifest.is_none() => {
                manifest = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument '{}'", other),
        }
    }

    Ok(ReportArgs { manifest, set })
}

fn known_status_keys() -> String {
    UiStatus::all()
        .iter()
        .map(|status| status.key())
        .collect::<Vec<_>>()
        .join(", ")
}

fn pool_from_manifest(path: &Path) -> Result<SelectionPool> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let manifest: SelectionManifest = toml::from_str(&raw)
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;

    let mut pool = SelectionPool::new();
    for entry in manifest.selection {
        if entry.name.is_empty() {
            bail!("manifest contains a selection without a name");
        }

        let status = match entry.status.as_deref() {
            Some(key) => UiStatus::from_key(key).with_context(|| {
                format!("unknown status '{}' for selection '{}'", key, entry.name)
            })?,
            None => UiStatus::default(),
        };

        let id = pool.insert(SelectionInfo {
            name: entry.name,
            summary: entry.summary,
            order: entry.order,
            packages: entry.packages,
        });
        pool.set_status(id, status);
        pool.activate_changes(id, status);
    }

    Ok(pool)
}

fn print_rows(rows: &[SelectionEntry], settings: &FrontendSettings, status_col: usize, summary_col: usize) {
    for row in rows {
        let status = row.cell_text(status_col);
        let summary = elide(&row.cell_text(summary_col), settings.summary_width);
        if settings.show_package_counts {
            println!(
                "{:<20} {:<22} {:<width$} {:>4}",
                row.name(),
                status,
                summary,
                row.package_count(),
                width = settings.summary_width
            );
        } else {
            println!(
                "{:<20} {:<22} {:<width$}",
                row.name(),
                status,
                summary,
                width = settings.summary_width
            );
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let settings = load_frontend_settings();

    let (pool, from_snapshot) = match &args.manifest {
        Some(path) => (pool_from_manifest(path)?, false),
        None => (load_selection_snapshot_from_disk(), true),
    };

    if pool.is_empty() {
        bail!("no selections available; pass a manifest path or save a snapshot first");
    }

    if let Some(stamp) = pool.generated_at {
        println!("Snapshot generated {}", format_relative_time(stamp));
    }

    let pool = Rc::new(RefCell::new(pool));
    let (sender, receiver) = mpsc::channel();
    let mut list = SelectionList::new(Rc::clone(&pool), ReportSurface::default(), sender);
    list.refresh();

    let mut rows = list.view().rows.clone();
    rows.sort_by(|a, b| a.compare(b, list.summary_col(), true));

    println!("{} selection{}:", rows.len(), if rows.len() == 1 { "" } else { "s" });
    print_rows(&rows, &settings, list.status_col(), list.summary_col());

    if let Some(active) = list.current_selection() {
        println!("Active row: {}", active.name());
    }

    if let Some((name, status)) = args.set {
        let row = rows
            .iter()
            .find(|row| row.name() == name)
            .with_context(|| format!("selection '{}' not found", name))?;
        row.set_status(status);

        let notifications = receiver.try_iter().count();
        println!(
            "Set '{}' to {} ({} packages-changed notification{})",
            name,
            status.label(),
            notifications,
            if notifications == 1 { "" } else { "s" }
        );

        let mut states: Vec<(String, UiStatus)> = pool
            .borrow()
            .package_states()
            .iter()
            .map(|(package, state)| (package.clone(), *state))
            .collect();
        states.sort_by(|a, b| a.0.cmp(&b.0));
        for (package, state) in states {
            println!("  {:<28} {}", package, state.label());
        }

        if from_snapshot {
            pool.borrow_mut().generated_at = Some(Utc::now());
            if let Err(err) = save_selection_snapshot_to_disk(&pool.borrow()) {
                eprintln!("Failed to save selections snapshot: {}", err);
            }
        }
    }

    Ok(())
}
