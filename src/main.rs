use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use folio::{
    core::state::{AppState, PageSettings},
    domain::content::{Content, ContentSource},
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    presentation::components::page::render_page_text_with,
    trace_dbg,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based)
    let config = Config::new()?;

    let source = match &args.content {
        Some(path) => ContentSource::File(path.clone()),
        None => config.content_source(),
    };
    let content = Content::load(&source)?;

    let issues = content.validate();
    for issue in &issues {
        log::warn!("{source}: {issue}");
    }

    if args.check {
        for issue in &issues {
            println!("{source}: {issue}");
        }
        if !issues.is_empty() {
            return Err(eyre!("{} problem(s) found in {source}", issues.len()));
        }
        println!("{source}: ok");
        return Ok(());
    }

    let theme = trace_dbg!(args.theme.unwrap_or(config.theme));

    if args.print {
        let settings = PageSettings::new(&content, &config);
        for line in render_page_text_with(&content, theme, &settings, args.width) {
            println!("{line}");
        }
        return Ok(());
    }

    let state = AppState::new(Arc::new(content), config, theme, args.tick_rate);
    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .mouse(true);
    let mut runner = AppRunner::new(tui, state);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
