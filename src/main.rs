//! Scaffold Span Planner.
//!
//! Teilt gezeichnete Gerüst-Linien in Standard-Spannen auf und gibt Marker,
//! Blöcke, Prüfsumme und Innenband als JSON aus.
//!
//! Aufruf: `span-planner [--write-config] [--width <mm>] x1,y1,x2,y2 ...`

use anyhow::Context;
use glam::DVec2;
use scaffold_span_planner::app::LineIdSource;
use scaffold_span_planner::{PlannerOptions, ScaffoldLine, SequentialLineIds, SpanAllocator};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Scaffold Span Planner v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = PlannerOptions::config_path();
    let options = PlannerOptions::load_from_file(&config_path);
    let allocator = SpanAllocator::from_options(&options);

    let mut ids = SequentialLineIds::new();
    let mut width: Option<u32> = None;
    let mut args = std::env::args().skip(1);
    let mut processed = 0usize;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--write-config" => options.save_to_file(&config_path)?,
            "--width" => {
                let value = args.next().context("--width erwartet einen Wert in mm")?;
                let parsed: u32 = value
                    .parse()
                    .with_context(|| format!("Ungültige Breite: {value}"))?;
                anyhow::ensure!(
                    allocator.widths().is_supported(parsed),
                    "Breite {parsed} mm wird nicht unterstützt (erlaubt: {:?})",
                    allocator.widths().widths()
                );
                width = Some(parsed);
            }
            coords => {
                let (start, end) = parse_coordinates(coords)?;
                let mut line = ScaffoldLine::new(ids.next_id("line"), start, end);
                if let Some(width) = width {
                    line = line.with_block_width(width);
                }
                print_allocation(&allocator, &line)?;
                processed += 1;
            }
        }
    }

    if processed == 0 {
        log::warn!("Keine Linien angegeben (Format: x1,y1,x2,y2)");
    }

    Ok(())
}

/// Parst `x1,y1,x2,y2` in Start- und Endpunkt.
fn parse_coordinates(raw: &str) -> anyhow::Result<(DVec2, DVec2)> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Ungültige Koordinate '{part}' in '{raw}'"))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;

    match values.as_slice() {
        [x1, y1, x2, y2] => Ok((DVec2::new(*x1, *y1), DVec2::new(*x2, *y2))),
        _ => anyhow::bail!("Erwartet vier Werte x1,y1,x2,y2, erhalten: '{raw}'"),
    }
}

fn print_allocation(allocator: &SpanAllocator, line: &ScaffoldLine) -> anyhow::Result<()> {
    let json = match allocator.allocate(line) {
        Ok(allocation) => serde_json::to_string_pretty(&allocation)?,
        Err(failure) => {
            log::warn!("{}", failure);
            serde_json::to_string_pretty(&failure)?
        }
    };
    println!("{json}");
    Ok(())
}
