use std::env;
use std::path::{Path, PathBuf};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog::{self, CatalogError};
use crate::chrome::{Banner, KeyHints};
use crate::config;
use crate::router::History;
use crate::view::{CatalogListView, View, render_text};

mod event_loop;
mod logging;
mod settings;

const USAGE: &str = "usage: shelf [--print] [CATALOG]";

/// Parsed command line: `shelf [--print] [CATALOG]`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    print: bool,
    help: bool,
    catalog: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum ArgsError {
    #[error("unknown option `{0}`\n{usage}", usage = USAGE)]
    UnknownOption(String),

    #[error("unexpected argument `{0}`, only one catalog may be given\n{usage}", usage = USAGE)]
    ExtraArgument(String),
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, ArgsError> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--print" | "-p" => parsed.print = true,
            "--help" | "-h" => parsed.help = true,
            s if s.starts_with('-') && s != "-" => return Err(ArgsError::UnknownOption(arg)),
            _ if parsed.catalog.is_some() => return Err(ArgsError::ExtraArgument(arg)),
            _ => parsed.catalog = Some(PathBuf::from(arg)),
        }
    }
    Ok(parsed)
}

/// The command-line catalog wins over `catalog.path`.
fn catalog_path(args: &Args, settings: &config::Settings) -> Option<PathBuf> {
    args.catalog
        .clone()
        .or_else(|| settings.catalog.path.clone())
}

fn list_view(settings: &config::Settings) -> CatalogListView<Banner, KeyHints> {
    CatalogListView::new(Banner::new(&settings.ui), KeyHints)
}

/// Render the catalog at `path`. No catalog at all is an absent collection,
/// rendered as the empty state.
fn initial_view(
    list: &CatalogListView<Banner, KeyHints>,
    path: Option<&Path>,
) -> Result<View, CatalogError> {
    let books = match path {
        Some(path) => Some(catalog::load(path)?),
        None => {
            log::info!("no catalog file given");
            None
        }
    };

    let view = list.render(books.as_deref());
    log::debug!("rendered {} table rows", view.table.row_count());
    Ok(view)
}

/// The `--print` output for `path`.
fn print_view(settings: &config::Settings, path: Option<&Path>) -> Result<String, CatalogError> {
    let view = initial_view(&list_view(settings), path)?;
    Ok(render_text(&view))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    if let Some(reason) = &fallback {
        eprintln!("shelf: {reason}");
    }
    logging::init(&settings.log);
    if let Some(reason) = &fallback {
        log::warn!("{reason}");
    }

    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    let catalog = catalog_path(&args, &settings);

    if args.print {
        print!("{}", print_view(&settings, catalog.as_deref())?);
        return Ok(());
    }

    let list = list_view(&settings);
    let view = initial_view(&list, catalog.as_deref())?;

    let mut app = App::new(view);
    if let Some(path) = catalog {
        app.set_catalog(path);
    }
    let mut router = History::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = (|| {
        let mut state = event_loop::EventLoopState::new();
        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &list,
            &mut router,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("session ended after {} navigations", router.visited().len());
    if let Some(route) = run_result? {
        println!("{route}");
    }
    Ok(())
}
