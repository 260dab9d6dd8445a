use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use sparselife::{Board, Bounds, Pos2, render};
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Clears the screen and prints one coloured frame, for use without raw mode
pub fn print_frame<W: Write>(out: &mut W, step: u64, board: &Board) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::Green),
        Print(render::frame_header(step, board)),
        Print("\n"),
        SetForegroundColor(Color::Red),
        Print(board),
        ResetColor,
    )?;
    out.flush()
}

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Full-screen terminal view of the board
///
/// Row 0 holds the status header, the board is drawn below it. Raw mode is
/// on for the lifetime of the value, so Ctrl+C arrives as a key event.
pub struct ConsoleRender {
    tl: Pos2,
    report: String,
}
impl ConsoleRender {
    pub fn new(board: &Board) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        // start with the seeded pattern in the top left corner
        let tl = board.bounds().map(|b| b.min).unwrap_or_default();
        Ok(Self {
            tl,
            report: String::new(),
        })
    }

    fn viewport(&self, cols: u16, rows: u16) -> Option<Bounds> {
        if cols == 0 || rows < 2 {
            return None;
        }
        Some(Bounds {
            min: self.tl,
            max: self.tl
                + Pos2 {
                    x: i32::from(cols) - 1,
                    y: i32::from(rows) - 2,
                },
        })
    }

    pub fn render(&self, step: u64, board: &Board) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Green),
            Print(render::frame_header(step, board)),
            Print("  "),
            Print(&self.report),
        )?;

        let visible = board
            .bounds()
            .zip(self.viewport(cols, rows))
            .and_then(|(b, view)| b.intersect(view));
        if let Some(visible) = visible {
            let mut frame = String::new();
            render::render_rows(Some(visible), |pos| board.is_alive(pos), &mut frame)
                .map_err(io::Error::other)?;

            // offsets are inside the viewport, so they fit the terminal size
            let col = (visible.min.x - self.tl.x) as u16;
            let top = (visible.min.y - self.tl.y) as u16 + 1;
            queue!(stdout, SetForegroundColor(Color::Red))?;
            for (i, line) in frame.lines().enumerate() {
                queue!(stdout, cursor::MoveTo(col, top + i as u16), Print(line))?;
            }
        }

        queue!(stdout, ResetColor)?;
        stdout.flush()
    }

    pub fn poll_events(&mut self, timeout: Duration) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Esc | KeyCode::Char('q'),
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            // arrows to move grid
            event::Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Up => self.tl.y -= 1,
                KeyCode::Down => self.tl.y += 1,
                KeyCode::Left => self.tl.x -= 1,
                KeyCode::Right => self.tl.x += 1,
                _ => {}
            },
            _ => {}
        }
        outp
    }

    /// Handles input until `delay` has passed, redrawing after every pan
    pub fn wait(&mut self, delay: Duration, step: u64, board: &Board) -> io::Result<ConsoleCommand> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.poll_events(remaining)? {
                Some(ConsoleCommand::Exit) => return Ok(ConsoleCommand::Exit),
                Some(ConsoleCommand::Handled) => self.render(step, board)?,
                None => return Ok(ConsoleCommand::Handled),
            }
            if remaining.is_zero() {
                return Ok(ConsoleCommand::Handled);
            }
        }
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen) {
            tracing::warn!(%err, "failed to restore the terminal screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to disable raw mode");
        }
    }
}
