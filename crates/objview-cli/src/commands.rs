use super::args::{Cli, Commands};
use super::output;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use objview_render::{PreviewPresenter, TextFormatter, render_preview};
use objview_types::{Mode, Preview};
use std::fs;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let enable_color = !cli.no_color && std::io::stdout().is_terminal();

    match cli.command {
        Commands::Render { file, mode, title } => {
            handle_render(&file, mode.into(), title, enable_color)
        }
        Commands::Check { file, mode } => handle_check(&file, mode.into()),
    }
}

fn load_preview(path: &Path) -> Result<Preview> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Preview::from_json_str(&json)
        .with_context(|| format!("malformed preview document: {}", path.display()))
}

fn handle_render(path: &Path, mode: Mode, title: bool, enable_color: bool) -> Result<()> {
    let preview = load_preview(path)?;
    let mut presenter = PreviewPresenter::new(preview, mode, &TextFormatter)?;

    if title {
        presenter.show_title();
    }

    let mut line = output::render_text(presenter.visible(), enable_color);
    if let Some(size) = presenter.size() {
        line.push_str(&format!(" ({})", size));
    }
    println!("{}", line);

    Ok(())
}

fn handle_check(path: &Path, mode: Mode) -> Result<()> {
    let preview = load_preview(path)?;
    let rendered = render_preview(&preview, mode)?;

    println!("lossless: {}", rendered.lossless);
    println!("overflow: {}", preview.overflow);

    // Scripting surface: non-lossless previews fail the check.
    if !rendered.lossless {
        std::process::exit(1);
    }

    Ok(())
}
