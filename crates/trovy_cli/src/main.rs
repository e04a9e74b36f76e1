//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `trovy_core` wiring end to end.
//! - Keep output deterministic for quick local sanity checks.

use trovy_core::db::open_db_in_memory;
use trovy_core::{ListService, SqliteSlotStore};

fn main() {
    println!("trovy_core ping={}", trovy_core::ping());
    println!("trovy_core version={}", trovy_core::core_version());

    match smoke_cycle() {
        Ok(summary) => println!("store smoke: {summary}"),
        Err(err) => {
            eprintln!("store smoke failed: {err}");
            std::process::exit(1);
        }
    }
}

/// Runs one create/read cycle against an in-memory store.
fn smoke_cycle() -> Result<String, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let service = ListService::new(SqliteSlotStore::new(&conn));

    let created = service.create_list("Smoke", "cli wiring probe", false)?;
    let list = service.add_item(created.id, "first item")?;
    let all = service.list_all()?;

    let progress = list.progress();
    Ok(format!(
        "lists={} items={} completed={}",
        all.len(),
        progress.total,
        progress.completed
    ))
}
