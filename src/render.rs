//! Frame renderers for a running board.
//!
//! A frame is a `-` border of width `scale * cols + 2`, then one line per
//! row framed by `|`, each cell drawn as its glyph repeated `scale` times,
//! then the closing border.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::board::Board;

pub trait Renderer {
    fn render(&mut self, board: &Board, generation: u64) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, board: &Board, generation: u64) -> io::Result<()> {
        (**self).render(board, generation)
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _board: &Board, _generation: u64) -> io::Result<()> {
        Ok(())
    }
}

/// Appearance and pacing of rendered frames.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Horizontal repeat of each cell glyph.
    pub scale: usize,
    pub live_glyph: char,
    pub dead_glyph: char,
    pub live_color: Color,
    pub dead_color: Color,
    pub border_color: Color,
    /// Clear the screen before each frame.
    pub clear: bool,
    /// Pause after each frame.
    pub delay: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 2,
            live_glyph: '#',
            dead_glyph: '.',
            live_color: Color::Cyan,
            dead_color: Color::Magenta,
            border_color: Color::White,
            clear: true,
            delay: Duration::from_millis(100),
        }
    }
}

impl RenderConfig {
    pub fn scale(mut self, scale: usize) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn glyphs(mut self, live: char, dead: char) -> Self {
        self.live_glyph = live;
        self.dead_glyph = dead;
        self
    }

    pub fn colors(mut self, live: Color, dead: Color) -> Self {
        self.live_color = live;
        self.dead_color = dead;
        self
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

fn border(board: &Board, scale: usize) -> String {
    "-".repeat(scale * board.cols() + 2)
}

fn cell_run(glyph: char, scale: usize) -> String {
    std::iter::repeat_n(glyph, scale).collect()
}

/// Columns and lines one rendered generation occupies, status line included.
pub fn frame_size(board: &Board, config: &RenderConfig) -> (usize, usize) {
    let width = config.scale.saturating_mul(board.cols()).saturating_add(2);
    (width, board.rows().saturating_add(3))
}

/// Uncoloured frame text, newline-terminated.
pub fn frame(board: &Board, config: &RenderConfig) -> String {
    let live = cell_run(config.live_glyph, config.scale);
    let dead = cell_run(config.dead_glyph, config.scale);
    let edge = border(board, config.scale);

    let mut out = String::with_capacity((edge.len() + 1) * (board.rows() + 2));
    out.push_str(&edge);
    out.push('\n');
    for row in board.iter_rows() {
        out.push('|');
        for &cell in row {
            out.push_str(if cell == 1 { &live } else { &dead });
        }
        out.push_str("|\n");
    }
    out.push_str(&edge);
    out.push('\n');
    out
}

/// Writes uncoloured frames with no screen control, followed by a
/// generation line.
pub struct PlainRenderer<W: Write> {
    out: W,
    config: RenderConfig,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn render(&mut self, board: &Board, generation: u64) -> io::Result<()> {
        self.out.write_all(frame(board, &self.config).as_bytes())?;
        writeln!(
            self.out,
            "generation {generation}, population {}",
            board.population()
        )?;
        self.out.flush()?;
        if !self.config.delay.is_zero() {
            thread::sleep(self.config.delay);
        }
        Ok(())
    }
}

/// Coloured terminal renderer.
pub struct TerminalRenderer<W: Write> {
    out: W,
    config: RenderConfig,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(config: RenderConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    fn queue_border(&mut self, edge: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(self.config.border_color),
            Print(edge),
            Print("\n")
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, board: &Board, generation: u64) -> io::Result<()> {
        if self.config.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let live = cell_run(self.config.live_glyph, self.config.scale);
        let dead = cell_run(self.config.dead_glyph, self.config.scale);
        let edge = border(board, self.config.scale);

        self.queue_border(&edge)?;
        for row in board.iter_rows() {
            queue!(
                self.out,
                SetForegroundColor(self.config.border_color),
                Print('|')
            )?;
            for &cell in row {
                let (color, run) = if cell == 1 {
                    (self.config.live_color, &live)
                } else {
                    (self.config.dead_color, &dead)
                };
                queue!(self.out, SetForegroundColor(color), Print(run))?;
            }
            queue!(
                self.out,
                SetForegroundColor(self.config.border_color),
                Print("|\n")
            )?;
        }
        self.queue_border(&edge)?;
        queue!(
            self.out,
            ResetColor,
            Print(format!(
                "generation {generation}, population {}\n",
                board.population()
            ))
        )?;
        self.out.flush()?;

        if !self.config.delay.is_zero() {
            thread::sleep(self.config.delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{PlainRenderer, RenderConfig, Renderer, TerminalRenderer, frame, frame_size};
    use crate::board::Board;

    fn config() -> RenderConfig {
        RenderConfig::default().delay(Duration::ZERO).clear(false)
    }

    #[test]
    fn frame_has_scaled_border_and_cells() {
        let board = Board::from_rows([[1u8, 0], [0, 1]]).unwrap();
        let text = frame(&board, &config().scale(2).glyphs('#', ' '));
        assert_eq!(text, "------\n|##  |\n|  ##|\n------\n");
    }

    #[test]
    fn frame_size_counts_borders_and_status_line() {
        let board = Board::from_rows([[1u8, 0], [0, 1]]).unwrap();
        let config = config().scale(2);
        let (width, height) = frame_size(&board, &config);
        assert_eq!((width, height), (6, 5));

        let mut renderer = PlainRenderer::new(Vec::new(), config);
        renderer.render(&board, 0).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.lines().count(), height);
        assert_eq!(out.lines().next().map(str::len), Some(width));
    }

    #[test]
    fn empty_board_frame_is_just_borders() {
        let text = frame(&Board::new(0, 0), &config().scale(3));
        assert_eq!(text, "--\n--\n");
    }

    #[test]
    fn plain_renderer_appends_generation_line() {
        let board = Board::from_rows([[1u8]]).unwrap();
        let mut renderer = PlainRenderer::new(Vec::new(), config().scale(1));
        renderer.render(&board, 4).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "---\n|#|\n---\ngeneration 4, population 1\n");
    }

    #[test]
    fn terminal_renderer_emits_escape_codes() {
        let board = Board::from_rows([[1u8, 0]]).unwrap();
        let mut buf = Vec::new();
        TerminalRenderer::new(&mut buf, config().clear(true))
            .render(&board, 0)
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("##"));
        assert!(out.contains("generation 0, population 1"));
    }
}
