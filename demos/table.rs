//! Table demo: scroll through 100,000 rows in the terminal.
//!
//! Only the rows on screen (plus overscan) exist as elements at any time.
//!
//! Keys: arrows / j k / PgUp PgDn / Home End to scroll, mouse wheel,
//! `m` jump to the middle, `e` edit the top row, `h` halve the data set,
//! `q` or Escape to quit.

use rowport::terminal::{
    Column, Columns, InputEvent, KeyCode, LineTarget, Modifiers, OutputBuffer, Rgb, RowElement,
    SessionConfig, Style, TerminalSession, TerminalViewport,
};
use rowport::{Rect, ScrollContainer, VirtualScrollConfig, VirtualScrollManager};
use std::rc::Rc;
use std::time::{Duration, Instant};

const ROWS: usize = 100_000;

#[derive(Debug, Clone)]
struct Record {
    id: usize,
    name: String,
    city: &'static str,
    balance: i64,
}

const CITIES: [&str; 6] = ["Lisbon", "Osaka", "Nairobi", "Quito", "Tallinn", "Perth"];

fn records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|id| Record {
            id,
            name: format!("customer-{id:06}"),
            city: CITIES[id % CITIES.len()],
            balance: (id as i64 * 7919) % 20_000 - 10_000,
        })
        .collect()
}

fn row_style(index: usize, record: &Record) -> Style {
    let base = if index % 2 == 0 {
        Style::PLAIN.with_bg(Rgb::new(24, 24, 32))
    } else {
        Style::PLAIN
    };
    if record.balance < 0 {
        base.with_fg(Rgb::new(230, 110, 110))
    } else {
        base.with_fg(Rgb::new(210, 210, 210))
    }
}

fn row_text(columns: &Columns, record: &Record) -> String {
    columns.format(&[
        record.id.to_string(),
        record.name.clone(),
        record.city.to_string(),
        record.balance.to_string(),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = TerminalSession::start(SessionConfig::default())?;

    let columns = Rc::new(Columns::new(vec![
        Column::new("#", 8),
        Column::new("name", 18),
        Column::new("city", 10),
        Column::new("balance", 10),
    ]));
    let create_columns = Rc::clone(&columns);
    let update_columns = Rc::clone(&columns);

    // Header and status line.
    let viewport = TerminalViewport::new(session.height(), 2);
    let sample = RowElement::new(columns.header(), Style::PLAIN);

    let mut manager = VirtualScrollManager::builder()
        .target(LineTarget::seeded(sample))
        .container(viewport)
        .config(VirtualScrollConfig::default().with_overscan(8))
        .items(records(ROWS))
        .create(move |record: &Record, index| {
            RowElement::new(row_text(&create_columns, record), row_style(index, record))
        })
        .update(move |row: &mut RowElement, record: &Record, index| {
            row.set(row_text(&update_columns, record), row_style(index, record));
        })
        .build()?;

    let header_style = Style::PLAIN
        .with_fg(Rgb::WHITE)
        .with_bg(Rgb::new(40, 80, 120))
        .with_modifiers(Modifiers::BOLD);
    let status_style = Style::PLAIN.with_fg(Rgb::new(160, 160, 160)).with_modifiers(Modifiers::DIM);

    let mut out = OutputBuffer::with_capacity(64 * 1024);
    let mut dirty = true;
    let mut edits = 0u64;

    'main: loop {
        let timeout = manager
            .next_deadline()
            .map_or(Duration::from_millis(50), |deadline| {
                deadline.saturating_duration_since(Instant::now())
            });

        if let Some(first) = session.wait_input(timeout) {
            let mut events = vec![first];
            events.extend(session.drain_input());
            for event in events {
                match event {
                    InputEvent::Key {
                        code: KeyCode::Char('q') | KeyCode::Esc,
                        ..
                    }
                    | InputEvent::Shutdown => break 'main,
                    InputEvent::Key {
                        code: KeyCode::Char('m'),
                        ..
                    } => {
                        let middle = manager.item_count() / 2;
                        manager.scroll_to_index(middle);
                    }
                    InputEvent::Key {
                        code: KeyCode::Char('e'),
                        ..
                    } => {
                        let top = manager.container().scroll_offset() as usize;
                        if let Some(record) = manager.items().get(top).cloned() {
                            edits += 1;
                            let edited = Record {
                                name: format!("edited #{edits}"),
                                ..record
                            };
                            manager.update_at(top, edited)?;
                            dirty = true;
                        }
                    }
                    InputEvent::Key {
                        code: KeyCode::Char('h'),
                        ..
                    } => {
                        let half = manager.item_count() / 2;
                        manager.set_data(records(half.max(1)));
                        dirty = true;
                    }
                    InputEvent::Resize { width, height } => {
                        session.handle_resize(width, height);
                        manager.container_mut().apply(&event);
                        dirty = true;
                    }
                    other => {
                        manager.container_mut().apply(&other);
                    }
                }
            }
        }

        if manager.pump(Instant::now()).is_some() {
            dirty = true;
        }
        if !dirty {
            continue;
        }
        dirty = false;

        let screen = Rect::from_size(session.width(), session.height());
        let (header, rest) = screen.split_vertical(1);
        let (body, status) = rest.split_vertical(rest.height.saturating_sub(1));

        out.clear();
        out.cursor_move(header.x, header.y);
        out.set_style(&header_style);
        out.write_str(&rowport::terminal::fit(&columns.header(), usize::from(header.width)));

        let offset = manager.container().scroll_offset();
        manager.target().paint(offset, body, &mut out);

        let range = manager.visible_range();
        let line = format!(
            " rows {}  rendered {}  range {:?}  offset {}  extent {}",
            manager.item_count(),
            manager.rendered_len(),
            range,
            offset,
            manager.total_extent(),
        );
        out.cursor_move(status.x, status.y);
        out.set_style(&status_style);
        out.write_str(&rowport::terminal::fit(&line, usize::from(status.width)));
        out.reset_attrs();
        session.present(&out)?;
    }

    manager.destroy();
    Ok(())
}
