//! Plain-text rendering of a store snapshot.

use std::fmt::Write;

use todo_core::{LoadStatus, StoreState};

pub fn render(state: &StoreState) -> String {
    let mut out = String::new();
    match state.status {
        LoadStatus::Loading => out.push_str("loading...\n"),
        LoadStatus::Rejected => {
            let message = state.last_error.as_deref().unwrap_or("unknown error");
            let _ = writeln!(out, "error: {message}");
        }
        LoadStatus::Idle | LoadStatus::Resolved => {}
    }

    if state.items.is_empty() {
        out.push_str("(no todos)\n");
        return out;
    }
    for todo in &state.items {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {:>4}  {}", todo.id.0, todo.title);
    }
    let _ = writeln!(
        out,
        "{} of {} done",
        state.completed_count(),
        state.items.len()
    );
    out
}
