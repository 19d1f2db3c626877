use std::io::stdout;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_glass_core::content::{SectionId, SiteContent};
use folio_glass_core::lifecycle::PageLifecycle;
use folio_glass_core::scroll::SmoothScroll;
use folio_glass_core::tilt::{CardSlot, SurfaceHandle};
use folio_glass_core::views::page::{card_regions, layout_page};
use folio_glass_protocol::{Orientation, Point, RenderCommand, TextAlign, ThemeToken};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};

/// Page units per terminal cell. A character cell is roughly twice as tall
/// as it is wide, so the page keeps its proportions on screen.
const PX_PER_COL: f64 = 8.0;
const PX_PER_ROW: f64 = 16.0;

const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(33);

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background | ThemeToken::SceneBackdrop => Color::Black,
        ThemeToken::BackdropGlowTop | ThemeToken::BackdropGlowBottom => Color::Rgb(16, 20, 40),
        ThemeToken::Surface | ThemeToken::NavBackground => Color::Rgb(16, 23, 41),
        ThemeToken::Border | ThemeToken::NavBorder => Color::DarkGray,
        ThemeToken::BrandAccent | ThemeToken::AccentCyan => Color::Cyan,
        ThemeToken::AccentIndigo => Color::LightBlue,
        ThemeToken::AccentFuchsia => Color::Magenta,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted | ThemeToken::FooterText => Color::DarkGray,
        ThemeToken::ButtonPrimary => Color::Cyan,
        ThemeToken::ButtonPrimaryText => Color::Black,
        ThemeToken::ButtonGhost | ThemeToken::FormField => Color::Rgb(15, 24, 46),
        ThemeToken::ButtonGhostBorder | ThemeToken::FormFieldBorder => Color::DarkGray,
        ThemeToken::CardSurface => Color::Rgb(18, 26, 48),
        ThemeToken::CardBorder => Color::Rgb(38, 52, 90),
        ThemeToken::CardGlow | ThemeToken::HoverHighlight | ThemeToken::SceneWire => {
            Color::LightCyan
        }
        ThemeToken::CardMedia => Color::Rgb(26, 37, 70),
        ThemeToken::TileCyan => Color::Cyan,
        ThemeToken::TileIndigo => Color::Blue,
        ThemeToken::TileFuchsia => Color::Magenta,
        ThemeToken::TileSky => Color::LightBlue,
        ThemeToken::TileViolet | ThemeToken::TilePurple => Color::Rgb(120, 80, 200),
    }
}

pub fn render_tui(content: &SiteContent) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut scroll = SmoothScroll::new();
    let mut lifecycle = PageLifecycle::new();
    let mut slots: Vec<Rc<CardSlot>> = Vec::new();
    let mut pointer: Option<Point> = None;

    let result = run_loop(
        &mut terminal,
        content,
        &mut scroll,
        &mut lifecycle,
        &mut slots,
        &mut pointer,
    );

    lifecycle.unmount();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    content: &SiteContent,
    scroll: &mut SmoothScroll,
    lifecycle: &mut PageLifecycle,
    slots: &mut Vec<Rc<CardSlot>>,
    pointer: &mut Option<Point>,
) -> Result<()> {
    loop {
        if slots.len() != content.projects.len() {
            *slots = (0..content.projects.len()).map(|_| CardSlot::new()).collect();
            lifecycle.mount(
                slots
                    .iter()
                    .map(|s| s.clone() as Rc<dyn SurfaceHandle>)
                    .collect(),
            );
        }

        scroll.tick(POLL_INTERVAL.as_secs_f64());

        let term_size = terminal.size()?;
        let page_width = f64::from(term_size.width) * PX_PER_COL;
        let orientations: Vec<Orientation> = slots.iter().map(|s| s.orientation()).collect();
        let page = layout_page(content, page_width, &orientations);

        // Card geometry in page coordinates; the mouse handler converts
        // cell positions to the same space.
        for (id, rect) in card_regions(&page.commands) {
            if let Some(slot) = slots.get(id as usize) {
                slot.set_rect(Some(rect));
            }
        }
        if let Some(registration) = lifecycle.registration_mut() {
            registration.track(*pointer);
        }

        let max_scroll = (page.height - f64::from(term_size.height.saturating_sub(1)) * PX_PER_ROW)
            .max(0.0);
        let offset = scroll.offset().min(max_scroll);

        terminal.draw(|frame| {
            let area = frame.area();

            // Header: brand plus key hints.
            let header_area = Rect::new(0, 0, area.width, 1);
            let header = Block::default()
                .title(format!(
                    " {} | 1-5 jump to section | ↑↓ scroll | q quit ",
                    content.brand
                ))
                .style(Style::default().fg(Color::Cyan).bg(Color::Rgb(16, 23, 41)));
            frame.render_widget(header, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            frame.render_widget(
                Block::default().style(Style::default().bg(Color::Black)),
                content_area,
            );

            let buf = frame.buffer_mut();
            // Tilted content shifts sideways while PushTilt is active.
            let mut tilt_shift: i32 = 0;
            let mut tilt_depth = 0usize;

            for cmd in &page.commands {
                match cmd {
                    RenderCommand::PushTilt { orientation, .. } => {
                        tilt_depth += 1;
                        if orientation.rotate_y.abs() >= 1.0 {
                            tilt_shift = orientation.rotate_y.signum() as i32;
                        }
                    }
                    RenderCommand::PopTransform => {
                        if tilt_depth > 0 {
                            tilt_depth -= 1;
                        }
                        if tilt_depth == 0 {
                            tilt_shift = 0;
                        }
                    }
                    RenderCommand::DrawRect { rect, fill, .. } => {
                        let bg = theme_to_color(*fill);
                        let col0 = (rect.x / PX_PER_COL) as i32 + tilt_shift;
                        let row0 = ((rect.y - offset) / PX_PER_ROW) as i32;
                        let cols = ((rect.w / PX_PER_COL) as i32).max(1);
                        let rows = ((rect.h / PX_PER_ROW) as i32).max(1);
                        for row in row0..row0 + rows {
                            for col in col0..col0 + cols {
                                if let Some(cell) = cell_at(buf, content_area, col, row) {
                                    cell.set_char(' ').set_bg(bg);
                                }
                            }
                        }
                    }
                    RenderCommand::DrawText {
                        position,
                        text,
                        color,
                        align,
                        ..
                    } => {
                        let fg = theme_to_color(*color);
                        let mut col = (position.x / PX_PER_COL) as i32 + tilt_shift;
                        let row = ((position.y - offset) / PX_PER_ROW) as i32;
                        let len = text.chars().count() as i32;
                        match align {
                            TextAlign::Left => {}
                            TextAlign::Center => col -= len / 2,
                            TextAlign::Right => col -= len,
                        }
                        for (i, ch) in text.chars().enumerate() {
                            if let Some(cell) = cell_at(buf, content_area, col + i as i32, row) {
                                cell.set_char(ch).set_fg(fg);
                            }
                        }
                    }
                    _ => {}
                }
            }
        })?;

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up => scroll.set_immediate(offset - 2.0 * PX_PER_ROW),
                    KeyCode::Down => {
                        scroll.set_immediate((offset + 2.0 * PX_PER_ROW).min(max_scroll));
                    }
                    KeyCode::Char(c @ '1'..='5') => {
                        let index = (c as usize) - ('1' as usize);
                        scroll.scroll_to_section(&page.sections, SectionId::ALL[index]);
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        // Cell → page coordinates (header row excluded).
                        let x = f64::from(mouse.column) * PX_PER_COL;
                        let y = f64::from(mouse.row.saturating_sub(1)) * PX_PER_ROW + offset;
                        *pointer = Some(Point::new(x, y));
                    }
                    MouseEventKind::ScrollDown => {
                        scroll.set_immediate((offset + 3.0 * PX_PER_ROW).min(max_scroll));
                    }
                    MouseEventKind::ScrollUp => scroll.set_immediate(offset - 3.0 * PX_PER_ROW),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    Ok(())
}

fn cell_at<'b>(
    buf: &'b mut ratatui::buffer::Buffer,
    area: Rect,
    col: i32,
    row: i32,
) -> Option<&'b mut ratatui::buffer::Cell> {
    if col < 0 || row < 0 {
        return None;
    }
    let x = area.x + col as u16;
    let y = area.y + row as u16;
    if col as u16 >= area.width || row as u16 >= area.height {
        return None;
    }
    Some(&mut buf[(x, y)])
}
