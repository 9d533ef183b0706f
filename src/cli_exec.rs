use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use plotcombine::archive::demo_document;
use plotcombine::compose::Composition;
use plotcombine::model::{AppConfig, AxisRange, DistributionId};
use plotcombine::render::{Canvas, CompositionKind};
use plotcombine::search::{self, DisplayMode};
use plotcombine::session::Session;

use crate::Commands;
use crate::cli_commands::{ComposeArgs, ComposeMode, DemoArgs, ListArgs};

pub(crate) fn handle_command(command: Commands, config: AppConfig) -> Result<()> {
    match command {
        Commands::List(args) => handle_list_command(args, config),
        Commands::Compose(args) => handle_compose_command(args, config),
        Commands::Demo(args) => handle_demo_command(args),
    }
}

#[derive(Serialize)]
struct ListRow<'a> {
    id: DistributionId,
    name: &'a str,
    path: &'a str,
    bins: usize,
    entries: f64,
}

fn open_session(archive: &Path, config: AppConfig) -> Result<Session> {
    let mut session = Session::from_config(config);
    session
        .open_archive(archive)
        .with_context(|| format!("open {}", archive.display()))?;
    Ok(session)
}

fn handle_list_command(args: ListArgs, config: AppConfig) -> Result<()> {
    let session = open_session(&args.archive, config)?;
    let mode = DisplayMode::from_show_path(args.show_path || session.options().show_path);
    let query = args.filter.as_deref().unwrap_or("");
    let rows = search::filter(session.catalog(), query, mode);

    if args.json {
        let out: Vec<ListRow> = rows
            .iter()
            .map(|h| ListRow {
                id: h.id,
                name: &h.name,
                path: &h.path,
                bins: h.payload.bins(),
                entries: h.payload.entries(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize list json")?
        );
        return Ok(());
    }

    if let Some(label) = session.archive_label() {
        println!("{}", label);
    }
    for h in rows {
        println!("{:>4}  {}", h.id, search::display_label(h, mode));
    }
    Ok(())
}

fn axis_range(values: Option<Vec<f64>>) -> Option<AxisRange> {
    match values.as_deref() {
        Some([a, b]) => Some(AxisRange::new(*a, *b)),
        _ => None,
    }
}

fn handle_compose_command(args: ComposeArgs, config: AppConfig) -> Result<()> {
    let mut session = open_session(&args.archive, config)?;

    for id in &args.select {
        session
            .select(DistributionId(*id))
            .with_context(|| format!("select {}", id))?;
    }
    // Flags only switch options on; config defaults stay as they are.
    if args.normalize && !session.options().normalize {
        session.toggle_normalize();
    }
    if args.stats && !session.options().show_stats {
        session.toggle_stats();
    }
    if args.legend && !session.options().show_legend {
        session.toggle_legend();
    }
    if args.publication && !session.options().publication_style {
        session.toggle_publication_style();
    }
    session.set_custom_title(args.title);
    session.set_x_range(axis_range(args.x_range));
    session.set_y_range(axis_range(args.y_range));

    let kind = match args.mode {
        ComposeMode::Preview => CompositionKind::Preview,
        ComposeMode::Overlay => CompositionKind::Overlay,
        ComposeMode::Merge => CompositionKind::Merge,
    };
    let outcome = session
        .compose(kind)
        .with_context(|| format!("compose {}", kind.label()))?;

    let Some(canvas) = session.current().filter(|_| outcome == Composition::Drawn) else {
        println!("Nothing selected");
        return Ok(());
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(canvas).context("serialize canvas json")?
        );
    } else {
        for line in canvas_summary(canvas) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn canvas_summary(canvas: &Canvas) -> Vec<String> {
    let mut out = vec![format!(
        "{} ({}): {}x{} style={}",
        canvas.title,
        canvas.kind.label(),
        canvas.width,
        canvas.height,
        canvas.style
    )];
    for (i, pad) in canvas.pads.iter().enumerate() {
        out.push(format!("pad {}", i));
        for s in &pad.series {
            let (lo, hi) = s.histogram.x_extent();
            out.push(format!(
                "  series {} color={} bins={} x=[{}, {}] integral={}{}",
                s.histogram.title(),
                s.color.0,
                s.histogram.visible_bins().len(),
                lo,
                hi,
                s.histogram.integral(),
                if s.normalized { " normalized" } else { "" }
            ));
        }
        for b in &pad.stat_boxes {
            let p = b.placement;
            out.push(format!(
                "  stats [{:.3}, {:.3}, {:.3}, {:.3}] {}",
                p.x_min,
                p.y_min,
                p.x_max,
                p.y_max,
                b.lines.join("; ")
            ));
        }
        if let Some(legend) = &pad.legend {
            let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
            out.push(format!("  legend [{}]", labels.join(", ")));
        }
    }
    out
}

fn handle_demo_command(args: DemoArgs) -> Result<()> {
    if args.out.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (pass --force to overwrite)",
            args.out.display()
        );
    }
    let doc = demo_document()?;
    let mut bytes = serde_json::to_vec_pretty(&doc).context("serialize demo archive")?;
    bytes.push(b'\n');
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write {}", args.out.display()))?;
    println!("Wrote demo archive to {}", args.out.display());
    Ok(())
}
