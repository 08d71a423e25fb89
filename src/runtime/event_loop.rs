use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, RowAction};
use crate::catalog;
use crate::config;
use crate::router::Router;
use crate::ui;
use crate::view::{CatalogListView, Chrome, Route};

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Last route handed to the router, shown in the status line.
    pub last_route: Option<Route>,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Outcome of a single key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
    /// A navigation ended the session (`navigation.exit_on_select`).
    Selected(Route),
}

/// Main terminal event loop: handles input and UI drawing.
///
/// Returns the selected route when the session ended on a navigation.
pub fn run<H: Chrome, F: Chrome, R: Router>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    list: &CatalogListView<H, F>,
    router: &mut R,
    state: &mut EventLoopState,
) -> Result<Option<Route>, Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, state.last_route.as_ref(), &settings.ui))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key_event(key, settings, app, list, router, state) {
                    Step::Continue => {}
                    Step::Quit => return Ok(None),
                    Step::Selected(route) => return Ok(Some(route)),
                }
            }
        }
    }
}

/// Hand `route` to the router; ends the session when configured to.
fn navigate<R: Router>(
    route: Route,
    settings: &config::Settings,
    router: &mut R,
    state: &mut EventLoopState,
) -> Step {
    router.navigate(&route);
    state.last_route = Some(route.clone());
    if settings.navigation.exit_on_select {
        Step::Selected(route)
    } else {
        Step::Continue
    }
}

/// Re-read the catalog file and re-render. A failed reload keeps the
/// current view.
fn reload<H: Chrome, F: Chrome>(app: &mut App, list: &CatalogListView<H, F>) {
    let Some(path) = app.catalog.clone() else {
        log::debug!("reload requested without a catalog file");
        return;
    };

    match catalog::load(&path) {
        Ok(books) => {
            log::info!("reloaded {} books from {}", books.len(), path.display());
            app.replace_view(list.render(Some(books.as_slice())));
        }
        Err(e) => log::warn!("reload failed, keeping current view: {e}"),
    }
}

pub fn handle_key_event<H: Chrome, F: Chrome, R: Router>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    list: &CatalogListView<H, F>,
    router: &mut R,
    state: &mut EventLoopState,
) -> Step {
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Step::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('h')
        | KeyCode::Char('l')
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab => app.toggle_action(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.first_row();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.last_row(),
        KeyCode::Enter => return navigate(app.focused_route(), settings, router, state),
        KeyCode::Char('n') => {
            let create = app.view.title.create.route.clone();
            return navigate(create, settings, router, state);
        }
        KeyCode::Char('v') => {
            if let Some(route) = app.row_route(RowAction::View) {
                return navigate(route, settings, router, state);
            }
        }
        KeyCode::Char('e') => {
            if let Some(route) = app.row_route(RowAction::Edit) {
                return navigate(route, settings, router, state);
            }
        }
        KeyCode::Char('R') => reload(app, list),
        _ => {}
    }

    Step::Continue
}
