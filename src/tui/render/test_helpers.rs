use chrono::{TimeZone, Utc};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::bridge::MemoryBridge;
use crate::io::todo_io::{TODOS_KEY, encode_todos};
use crate::model::{City, Todo, UiConfig, UserProfile};
use crate::session::Session;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Records with stable ids (`t0`, `t1`, ...) created at noon UTC on 2025-05-14
pub fn sample_todos(items: &[(&str, &str)]) -> Vec<Todo> {
    let created = Utc.with_ymd_and_hms(2025, 5, 14, 12, 0, 0).unwrap();
    items
        .iter()
        .enumerate()
        .map(|(i, (title, text))| Todo::with_id(format!("t{}", i), *title, *text, created))
        .collect()
}

pub fn app_with_bridge(bridge: MemoryBridge) -> App {
    let (session, _notices) = Session::load(Box::new(bridge));
    App::new(session, &UiConfig::default())
}

/// An App with no profile and no stored tasks
pub fn empty_app() -> App {
    app_with_bridge(MemoryBridge::new())
}

/// An App whose host storage holds the given (title, text) records
pub fn app_with_todos(items: &[(&str, &str)]) -> App {
    let raw = encode_todos(&sample_todos(items)).unwrap();
    app_with_bridge(MemoryBridge::new().with_value(TODOS_KEY, raw))
}

pub fn ivan() -> UserProfile {
    UserProfile {
        id: Some(1),
        first_name: "Ivan".into(),
        last_name: "Petrov".into(),
        photo_200: Some("https://example.com/ivan.jpg".into()),
        city: Some(City {
            id: Some(1),
            title: "Moscow".into(),
        }),
    }
}
