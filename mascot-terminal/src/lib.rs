/// Terminal playground for the seek-and-drop mascot
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::info;
use mascot_core::config::{ActionConfig, DropConfig, HoverConfig, SeekConfig};
use mascot_core::{Mascot, MascotConfig, MotionKind, Point, Viewport};
use std::cell::Cell;
use std::io::{self, stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

pub mod document;
pub mod renderer;

pub use document::{Document, GameBox};
pub use renderer::CellRenderer;

/// Defaults scaled from pixels down to terminal cells
pub fn terminal_config() -> MascotConfig {
    let mut config = MascotConfig::default();
    config.seek = SeekConfig {
        speed_factor: 0.08,
        min_step: 0.25,
        arrival_threshold: 1.0,
    };
    config.target.offscreen_margin = 4.0;
    config.drop = DropConfig { duration_ms: 800.0 };
    config.action = ActionConfig {
        duration_ms: 1000.0,
        click_slop: 0.0,
    };
    config.hover = HoverConfig {
        amplitude: 0.6,
        frequency: 4.0,
        return_speed: 0.2,
    };
    config.min_viewport_width = 0.0;
    config
}

/// Main application struct for the terminal playground
pub struct TerminalApp {
    mascot: Mascot,
    document: Document,
    renderer: CellRenderer,
    scroll_y: f64,
    columns: u16,
    rows: u16,
    consumed: Rc<Cell<bool>>,
    running: bool,
    started: Instant,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: MascotConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let consumed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&consumed);
        let mascot = Mascot::new(config).with_on_consumed(move || flag.set(true));

        let mut app = Self {
            mascot,
            document: Document::new(columns, rows),
            renderer: CellRenderer::new(columns as usize, rows as usize),
            scroll_y: 0.0,
            columns,
            rows,
            consumed,
            running: true,
            started: Instant::now(),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        };
        app.relayout();
        Ok(app)
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.update();
            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_y, f64::from(self.columns), f64::from(self.rows))
    }

    fn relayout(&mut self) {
        let viewport = self.viewport();
        self.mascot.update_layout(viewport, &self.document.layout());
    }

    fn game_box(&self) -> GameBox {
        GameBox {
            document_rect: self.document.game_box,
            scroll_y: self.scroll_y,
        }
    }

    fn scroll_by(&mut self, rows: f64) {
        let max = self.document.max_scroll(f64::from(self.rows));
        self.scroll_y = (self.scroll_y + rows).clamp(0.0, max);
        self.relayout();
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(columns, rows) => {
                self.columns = columns;
                self.rows = rows;
                self.document = Document::new(columns, rows);
                self.renderer.resize(columns as usize, rows as usize);
                self.scroll_by(0.0);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, KeyEvent { code, .. }: KeyEvent) {
        let page = f64::from(self.rows);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1.0),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1.0),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pointer = Point::new(f64::from(mouse.column), f64::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(position) = self.mascot.position() else {
                    return;
                };
                if hits_mascot(&position, self.scroll_y, &pointer) {
                    let center = Point::new(position.x, position.y - self.scroll_y);
                    self.mascot.pointer_down(&pointer, &center, || ());
                }
            }
            MouseEventKind::Moved => {
                let hovered = self
                    .mascot
                    .position()
                    .is_some_and(|position| hits_mascot(&position, self.scroll_y, &pointer));
                self.mascot.set_hovered(hovered);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let game_box = self.game_box();
                self.mascot.pointer_move(&pointer, self.scroll_y, &game_box);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let game_box = self.game_box();
                let outcome = self.mascot.pointer_up(&pointer, &game_box);
                info!("released mascot at {pointer:?}: {outcome:?}");
            }
            MouseEventKind::ScrollDown => self.scroll_by(3.0),
            MouseEventKind::ScrollUp => self.scroll_by(-3.0),
            _ => {}
        }
    }

    fn update(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.mascot.tick(now_ms);
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();

        for section in &self.document.sections {
            let rect = section.content.translated(0.0, -self.scroll_y);
            self.renderer.frame_rect(&rect, Color::DarkGrey);
            self.renderer.put_str(
                rect.left as i64 + 2,
                rect.top as i64 + 1,
                section.title,
                Color::White,
            );
        }

        let frame = self.mascot.frame();
        let game = self.document.game_box.translated(0.0, -self.scroll_y);
        let (label, color) = if self.consumed.get() {
            ("GAME STARTED", Color::Green)
        } else if frame.over_drop_target {
            ("Release to play", Color::Green)
        } else {
            ("Drop the mascot here", Color::Blue)
        };
        self.renderer.frame_rect(&game, color);
        let center = game.center();
        self.renderer.put_str(
            (center.x - label.len() as f64 / 2.0) as i64,
            center.y as i64,
            label,
            color,
        );

        self.renderer.draw_mascot(&frame, self.scroll_y);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Mascot Playground | FPS: {:.1} | {} | Scroll: {:.0} | j/k/wheel=Scroll Drag=Move Q=Quit",
                self.fps,
                motion_label(self.mascot.motion_kind(), self.mascot.is_playing_action()),
                self.scroll_y
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn motion_label(kind: MotionKind, playing_action: bool) -> &'static str {
    match kind {
        MotionKind::Arrived if playing_action => "waving",
        MotionKind::Seeking if playing_action => "waving",
        MotionKind::Seeking => "seeking",
        MotionKind::Arrived => "resting",
        MotionKind::Dragging => "dragging",
        MotionKind::Dropped => "dropping",
        MotionKind::Consumed => "consumed",
    }
}

/// Whether `pointer` would grab the mascot drawn at document `position`
pub fn hits_mascot(position: &Point, scroll_y: f64, pointer: &Point) -> bool {
    let center = Point::new(position.x, position.y - scroll_y);
    document::grab_area(&center).contains(pointer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_config_is_valid() {
        assert!(terminal_config().validate().is_ok());
    }

    #[test]
    fn test_hits_mascot_accounts_for_scroll() {
        let position = Point::new(20.0, 110.0);
        assert!(hits_mascot(&position, 100.0, &Point::new(21.0, 10.0)));
        assert!(!hits_mascot(&position, 0.0, &Point::new(21.0, 10.0)));
    }

    #[test]
    fn test_click_in_place_waves() {
        let doc = Document::new(100, 30);
        let mut mascot: Mascot = Mascot::new(terminal_config());
        mascot.update_layout(Viewport::new(30.0, 100.0, 30.0), &doc.layout());
        let cell = Point::new(50.0, 10.0);
        assert!(mascot.pointer_down(&cell, &cell, || ()));
        let game_box = GameBox {
            document_rect: doc.game_box,
            scroll_y: 30.0,
        };
        assert_eq!(
            mascot.pointer_up(&cell, &game_box),
            mascot_core::DragOutcome::Clicked
        );
        assert_eq!(motion_label(mascot.motion_kind(), mascot.is_playing_action()), "waving");
    }

    #[test]
    fn test_mascot_reaches_first_section_in_cells() {
        let doc = Document::new(100, 30);
        let mut mascot: Mascot = Mascot::new(terminal_config());
        mascot.update_layout(Viewport::new(30.0, 100.0, 30.0), &doc.layout());
        for frame in 0..2000 {
            mascot.tick(frame as f64 * 33.0);
        }
        assert!(mascot.has_arrived());
        // First section sits on the left, so the mascot rests on the right.
        assert!((mascot.position().unwrap().x - 90.0).abs() < 1.0);
    }
}
