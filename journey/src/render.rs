//! Drawing the maps and animating an itinerary with crossterm.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gateroute_core::Point;
use gateroute_maps::Scenario;
use gateroute_route::{GridId, Itinerary};

use crate::palette;

/// Terminal columns per map cell.
const CELL_WIDTH: u16 = 2;
/// Blank columns between two maps.
const GAP: u16 = 3;

/// Screen position of one map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub grid: GridId,
    pub title: String,
    /// Column of the first cell.
    pub x: u16,
    /// Row of the first cell; the title sits on the row above.
    pub y: u16,
}

/// Side-by-side placement of the world and every dungeon, with a status
/// line below the tallest map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    panels: Vec<Panel>,
    status_row: u16,
}

impl Board {
    pub fn new(scenario: &Scenario) -> Self {
        let top = 1;
        let mut x = 0;
        let mut height = 0;
        let mut panels = Vec::with_capacity(scenario.sub_areas.len() + 1);

        let world = std::iter::once((GridId::World, "world".to_string(), &scenario.world));
        let dungeons = scenario
            .sub_areas
            .iter()
            .enumerate()
            .map(|(i, a)| (GridId::SubArea(i), a.name.clone(), &a.grid));
        for (grid, title, g) in world.chain(dungeons) {
            panels.push(Panel {
                grid,
                title,
                x,
                y: top,
            });
            x = x.saturating_add((g.width() as u16).saturating_mul(CELL_WIDTH) + GAP);
            height = height.max(g.height() as u16);
        }

        Self {
            panels,
            status_row: top + height + 1,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn status_row(&self) -> u16 {
        self.status_row
    }

    /// Terminal position of cell `p` on grid `grid`.
    pub fn cell_origin(&self, grid: GridId, p: Point) -> Option<(u16, u16)> {
        let panel = self.panels.iter().find(|pn| pn.grid == grid)?;
        let x = u16::try_from(p.x).ok()?;
        let y = u16::try_from(p.y).ok()?;
        Some((panel.x + x * CELL_WIDTH, panel.y + y))
    }
}

fn color_of(grid: GridId) -> fn(char) -> Color {
    match grid {
        GridId::World => palette::world_color,
        GridId::SubArea(_) => palette::dungeon_color,
    }
}

/// Clear the screen and draw every map with its title.
pub fn draw_maps<W: Write>(out: &mut W, scenario: &Scenario, board: &Board) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for panel in board.panels() {
        let Some(grid) = scenario.grid(panel.grid) else {
            continue;
        };
        let color = color_of(panel.grid);
        queue!(
            out,
            cursor::MoveTo(panel.x, panel.y.saturating_sub(1)),
            SetForegroundColor(palette::LABEL),
            Print(&panel.title),
            ResetColor
        )?;
        for (y, row) in grid.rows().enumerate() {
            queue!(out, cursor::MoveTo(panel.x, panel.y + y as u16))?;
            for &ch in row {
                queue!(out, SetBackgroundColor(color(ch)), Print("  "))?;
            }
            queue!(out, ResetColor)?;
        }
    }
    out.flush()
}

/// Put the trail marker on a visited cell.
pub fn mark_step<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    board: &Board,
    grid: GridId,
    p: Point,
) -> io::Result<()> {
    let Some((x, y)) = board.cell_origin(grid, p) else {
        return Ok(());
    };
    let Some(ch) = scenario.grid(grid).and_then(|g| g.at(p)) else {
        return Ok(());
    };
    queue!(
        out,
        cursor::MoveTo(x, y),
        SetBackgroundColor(color_of(grid)(ch)),
        SetForegroundColor(palette::TRAIL),
        Print("()"),
        ResetColor
    )
}

/// Replace the status line.
pub fn status<W: Write>(out: &mut W, board: &Board, text: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, board.status_row()),
        terminal::Clear(ClearType::CurrentLine),
        SetForegroundColor(palette::LABEL),
        Print(text),
        ResetColor
    )
}

/// Draw the maps and walk the itinerary one step every `delay`.
///
/// Returns `false` if the user quit before the end.
pub fn animate<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    itinerary: &Itinerary,
    delay: Duration,
) -> io::Result<bool> {
    let board = Board::new(scenario);
    draw_maps(out, scenario, &board)?;

    let running = scenario.running_costs(itinerary);
    for ((grid, p), cost) in itinerary.steps().zip(running) {
        mark_step(out, scenario, &board, grid, p)?;
        status(out, &board, &format!("running cost: {cost}"))?;
        out.flush()?;
        if quit_requested(delay)? {
            return Ok(false);
        }
    }

    status(
        out,
        &board,
        &format!("final cost: {}   (press any key)", itinerary.total_cost()),
    )?;
    out.flush()?;
    Ok(true)
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Wait up to `delay` for a quit key.
fn quit_requested(delay: Duration) -> io::Result<bool> {
    if !event::poll(delay)? {
        return Ok(false);
    }
    Ok(matches!(event::read()?, Event::Key(k) if k.kind == KeyEventKind::Press && is_quit(&k)))
}

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut io::Stdout {
        &mut self.out
    }

    /// Block until a key is pressed.
    pub fn wait_key(&self) -> io::Result<()> {
        loop {
            if matches!(event::read()?, Event::Key(k) if k.kind == KeyEventKind::Press) {
                return Ok(());
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
