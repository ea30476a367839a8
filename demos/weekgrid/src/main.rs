//! weekgrid — smallest end-to-end run of the hearth layout engine.
//!
//! Feeds an embedded JSON calendar export through `layout_grid` for a
//! three-member household and prints the resulting week as an ASCII grid.
//! Swap the embedded feed for the fetch collaborator's output to drive a
//! real display.

use std::io::Cursor;

use anyhow::Result;
use chrono::{Local, TimeZone};

use hearth_core::Roster;
use hearth_grid::{GridLayout, layout_grid, load_events_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const WINDOW_DAYS: usize = 7;
const CELL_WIDTH: usize = 12;

// ── Embedded feed ─────────────────────────────────────────────────────────────

// A typical week: tagged per-member events, one wildcard event, one
// multi-day all-day event with an exclusive end, one untagged event
// (dropped), one unknown tag (dropped).
const FEED_JSON: &str = r#"[
  { "id": "e1", "title": "Kari: Hyttetur",
    "start": { "date": "2025-01-10" }, "end": { "date": "2025-01-12" } },
  { "id": "e2", "title": "Ola: Tannlege",
    "start": "2025-01-07T10:00:00", "end": "2025-01-07T11:00:00" },
  { "id": "e3", "title": "Ola: Kurs",
    "start": "2025-01-06T09:00:00", "end": "2025-01-08T16:00:00" },
  { "id": "e4", "title": "Alle: Julebord",
    "start": { "date": "2025-01-08" }, "end": { "date": "2025-01-09" } },
  { "id": "e5", "title": "Nora: Trening",
    "start": "2025-01-09T17:00:00", "end": "2025-01-09T18:30:00" },
  { "id": "e6", "title": "Handleliste uten tag",
    "start": "2025-01-06T08:00:00", "end": "2025-01-06T09:00:00" },
  { "id": "e7", "title": "Ukjent: Noe",
    "start": "2025-01-06T08:00:00", "end": "2025-01-06T09:00:00" }
]"#;

// ── Rendering ─────────────────────────────────────────────────────────────────

fn print_grid(grid: &GridLayout, roster: &Roster) {
    // Header: weekday-of-month per column.
    print!("{:<10}", "");
    for day in grid.window.days() {
        let header = day.format("%a %d").to_string();
        print!("|{header:^w$}", w = CELL_WIDTH);
    }
    println!("|");

    for id in roster.ids() {
        for lane in 0..grid.lane_count(id) {
            let label = if lane == 0 {
                roster.name(id).unwrap_or("?")
            } else {
                ""
            };
            print!("{label:<10}");
            for day in 0..grid.window.len() {
                let cell: String = grid
                    .placements_for(id)
                    .find(|p| p.lane == lane && p.start_day <= day && day <= p.end_day)
                    .map(|p| p.title.chars().take(CELL_WIDTH).collect())
                    .unwrap_or_default();
                print!("|{cell:^w$}", w = CELL_WIDTH);
            }
            println!("|");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== weekgrid — hearth layout engine ===");
    println!();

    // 1. Fixed roster — configuration, never discovered from the feed.
    let roster = Roster::new(["Kari", "Ola", "Nora"])?;
    println!("Roster: {}", roster.names().join(", "));

    // 2. Load the embedded feed.
    let events = load_events_reader(Cursor::new(FEED_JSON))?;
    println!("Feed: {} raw events", events.len());

    // 3. Lay out the window.  `now` is injected; pin it to the feed's week
    //    so the embedded dates land inside the window.
    let now = Local
        .with_ymd_and_hms(2025, 1, 6, 8, 0, 0)
        .single()
        .unwrap_or_else(Local::now);
    let grid = layout_grid(&events, &roster, now, WINDOW_DAYS);
    println!(
        "Grid: {} placements across {} lanes ({} days)",
        grid.placements.len(),
        grid.total_lanes(),
        grid.window.len()
    );
    println!();

    // 4. Print.
    print_grid(&grid, &roster);
    println!();

    // 5. Per-member summary.
    for id in roster.ids() {
        println!(
            "{:<8} lanes: {}  events: {}",
            roster.name(id).unwrap_or("?"),
            grid.lane_count(id),
            grid.placements_for(id).count()
        );
    }

    Ok(())
}
