//! Input events and their terminal source.
//!
//! The game only sees `InputEvent`s in world units. `CrosstermInput` drains
//! the terminal's event queue without blocking and translates each event.

use crate::viewport::Viewport;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Up,
    Enter,
    Escape,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close: Ctrl-C, or the terminal's event queue failing.
    Quit,
    KeyDown(Key),
    /// Pointer position in world units.
    PointerMoved { x: i32, y: i32 },
    /// Primary button state change.
    PointerButton { pressed: bool },
}

impl InputEvent {
    /// True for keys that flap the bird.
    pub fn is_jump(&self) -> bool {
        matches!(self, Self::KeyDown(Key::Space) | Self::KeyDown(Key::Up))
    }

    /// True for the keys that leave the current screen (`q` or Esc).
    pub fn is_leave(&self) -> bool {
        matches!(
            self,
            Self::KeyDown(Key::Escape) | Self::KeyDown(Key::Char('q')) | Self::KeyDown(Key::Char('Q'))
        )
    }
}

/// Something that can be polled once per tick for pending input.
pub trait InputSource {
    fn poll(&mut self, viewport: &Viewport) -> io::Result<Vec<InputEvent>>;
}

/// Reads from the crossterm event queue.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self, viewport: &Viewport) -> io::Result<Vec<InputEvent>> {
        Ok(drain(
            || event::poll(Duration::ZERO),
            event::read,
            viewport,
        ))
    }
}

/// Read every pending event. A failing event queue means the terminal is
/// gone, which is reported as `Quit` so a running round still gets saved.
fn drain<P, R>(mut pending: P, mut read: R, viewport: &Viewport) -> Vec<InputEvent>
where
    P: FnMut() -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let mut events = Vec::new();
    loop {
        match pending().and_then(|ready| ready.then(&mut read).transpose()) {
            Ok(Some(event)) => events.extend(translate(&event, viewport)),
            Ok(None) => break,
            Err(e) => {
                log::warn!("Terminal input failed, closing: {}", e);
                events.push(InputEvent::Quit);
                break;
            }
        }
    }
    events
}

/// Translate one terminal event into zero or more game events.
pub fn translate(event: &Event, viewport: &Viewport) -> Vec<InputEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event).into_iter().collect(),
        Event::Mouse(mouse_event) => translate_mouse(mouse_event, viewport),
        _ => Vec::new(),
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<InputEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(InputEvent::Quit);
    }

    let key = match key_event.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Up => Key::Up,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(InputEvent::KeyDown(key))
}

fn translate_mouse(mouse_event: &MouseEvent, viewport: &Viewport) -> Vec<InputEvent> {
    let mut events = Vec::new();
    match viewport.to_world(mouse_event.column, mouse_event.row) {
        Some((x, y)) => events.push(InputEvent::PointerMoved { x, y }),
        // Off the play area: park the pointer outside the world
        None => events.push(InputEvent::PointerMoved { x: -1, y: -1 }),
    }

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            events.push(InputEvent::PointerButton { pressed: true })
        }
        MouseEventKind::Up(MouseButton::Left) => {
            events.push(InputEvent::PointerButton { pressed: false })
        }
        _ => {}
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(0, 0, 128, 72))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_space_is_jump() {
        let events = translate(&key(KeyCode::Char(' '), KeyModifiers::NONE), &viewport());
        assert_eq!(events, vec![InputEvent::KeyDown(Key::Space)]);
        assert!(events[0].is_jump());
        assert!(InputEvent::KeyDown(Key::Up).is_jump());
    }

    #[test]
    fn test_ctrl_c_is_quit() {
        let events = translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), &viewport());
        assert_eq!(events, vec![InputEvent::Quit]);
    }

    #[test]
    fn test_leave_keys() {
        assert!(InputEvent::KeyDown(Key::Escape).is_leave());
        assert!(InputEvent::KeyDown(Key::Char('q')).is_leave());
        assert!(!InputEvent::KeyDown(Key::Char('w')).is_leave());
        assert!(!InputEvent::Quit.is_leave());
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(translate(&Event::Key(release), &viewport()).is_empty());
    }

    #[test]
    fn test_mouse_down_reports_position_then_button() {
        let events = translate(
            &mouse(MouseEventKind::Down(MouseButton::Left), 64, 40),
            &viewport(),
        );
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMoved { x: 645, y: 405 },
                InputEvent::PointerButton { pressed: true },
            ]
        );
    }

    #[test]
    fn test_mouse_move_only_reports_position() {
        let events = translate(&mouse(MouseEventKind::Moved, 0, 0), &viewport());
        assert_eq!(events, vec![InputEvent::PointerMoved { x: 5, y: 5 }]);
    }

    #[test]
    fn test_mouse_outside_viewport() {
        let events = translate(&mouse(MouseEventKind::Moved, 200, 5), &viewport());
        assert_eq!(events, vec![InputEvent::PointerMoved { x: -1, y: -1 }]);
    }

    #[test]
    fn test_drain_reads_until_queue_empty() {
        let mut queue = vec![
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Char(' '), KeyModifiers::NONE),
        ];
        let pending = queue.len();
        let mut polls = 0;
        let events = drain(
            || {
                polls += 1;
                Ok(polls <= pending)
            },
            || Ok(queue.remove(0)),
            &viewport(),
        );
        assert_eq!(
            events,
            vec![
                InputEvent::KeyDown(Key::Char('q')),
                InputEvent::KeyDown(Key::Space),
            ]
        );
    }

    #[test]
    fn test_broken_terminal_is_quit() {
        let events = drain(
            || Ok(true),
            || Err(io::Error::new(io::ErrorKind::BrokenPipe, "hang-up")),
            &viewport(),
        );
        assert_eq!(events, vec![InputEvent::Quit]);

        let events = drain(
            || Err(io::Error::new(io::ErrorKind::Other, "poll failed")),
            || Ok(Event::FocusGained),
            &viewport(),
        );
        assert_eq!(events, vec![InputEvent::Quit]);
    }

    #[test]
    fn test_resize_ignored() {
        assert!(translate(&Event::Resize(80, 24), &viewport()).is_empty());
    }
}
