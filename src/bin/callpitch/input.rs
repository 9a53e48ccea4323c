//! Keyboard/mouse translation so the page loop only sees semantic events.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, TrySendError};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Semantic page events produced from raw terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Quit,
    Escape,
    StartCall,
    EndCall,
    HeroCta,
    AcceptMockup,
    DeclineMockup,
    ThemeCycle,
    MotionToggle,
    DismissNotice,
    NextSection,
    PrevSection,
    JumpSection(usize),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    MouseClick { x: u16, y: u16 },
    Resize(u16, u16),
}

/// Map a key press to a page event. Repeats and releases are ignored.
pub(crate) fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        KeyCode::Esc => Some(InputEvent::Escape),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::StartCall),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(InputEvent::EndCall),
        KeyCode::Enter => Some(InputEvent::HeroCta),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(InputEvent::AcceptMockup),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(InputEvent::DeclineMockup),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputEvent::ThemeCycle),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(InputEvent::MotionToggle),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(InputEvent::DismissNotice),
        KeyCode::Tab => Some(InputEvent::NextSection),
        KeyCode::BackTab => Some(InputEvent::PrevSection),
        KeyCode::Char(c @ '1'..='4') => {
            Some(InputEvent::JumpSection(c as usize - '1' as usize))
        }
        KeyCode::Up => Some(InputEvent::ScrollUp),
        KeyCode::Down => Some(InputEvent::ScrollDown),
        KeyCode::PageUp => Some(InputEvent::PageUp),
        KeyCode::PageDown => Some(InputEvent::PageDown),
        KeyCode::Home => Some(InputEvent::Home),
        KeyCode::End => Some(InputEvent::End),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::MouseClick {
            x: mouse.column,
            y: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(InputEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(InputEvent::ScrollDown),
        _ => None,
    }
}

fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize(width, height)),
        _ => None,
    }
}

/// Spawn the blocking reader thread that feeds the event loop channel.
///
/// The channel is bounded; when the loop falls behind, excess events are
/// dropped rather than queued. The thread exits when the receiver is gone.
pub(crate) fn spawn_input_thread(tx: Sender<InputEvent>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        let event = match crossterm::event::read() {
            Ok(event) => event,
            Err(_) => return,
        };
        let Some(input) = map_event(event) else {
            continue;
        };
        match tx.try_send(input) {
            Ok(()) | Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Disconnected(_)) => return,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn core_keys_map_to_page_events() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(InputEvent::Escape));
        assert_eq!(
            map_key(press(KeyCode::Char('s'))),
            Some(InputEvent::StartCall)
        );
        assert_eq!(map_key(press(KeyCode::Char('e'))), Some(InputEvent::EndCall));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(InputEvent::HeroCta));
        assert_eq!(
            map_key(press(KeyCode::Char('t'))),
            Some(InputEvent::ThemeCycle)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('m'))),
            Some(InputEvent::MotionToggle)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('x'))),
            Some(InputEvent::DismissNotice)
        );
    }

    #[test]
    fn ctrl_c_quits_and_other_ctrl_chords_do_nothing() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(InputEvent::Quit));
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_s), None);
    }

    #[test]
    fn digits_jump_to_sections() {
        assert_eq!(
            map_key(press(KeyCode::Char('1'))),
            Some(InputEvent::JumpSection(0))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('4'))),
            Some(InputEvent::JumpSection(3))
        );
        assert_eq!(map_key(press(KeyCode::Char('5'))), None);
    }

    #[test]
    fn navigation_keys_map_to_scrolling() {
        assert_eq!(map_key(press(KeyCode::Tab)), Some(InputEvent::NextSection));
        assert_eq!(
            map_key(press(KeyCode::BackTab)),
            Some(InputEvent::PrevSection)
        );
        assert_eq!(map_key(press(KeyCode::Up)), Some(InputEvent::ScrollUp));
        assert_eq!(map_key(press(KeyCode::PageDown)), Some(InputEvent::PageDown));
        assert_eq!(map_key(press(KeyCode::Home)), Some(InputEvent::Home));
        assert_eq!(map_key(press(KeyCode::End)), Some(InputEvent::End));
    }

    #[test]
    fn releases_and_repeats_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
        key.kind = KeyEventKind::Repeat;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn mouse_left_click_carries_position() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            map_event(Event::Mouse(mouse)),
            Some(InputEvent::MouseClick { x: 12, y: 0 })
        );
    }

    #[test]
    fn mouse_wheel_scrolls() {
        let mut mouse = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_event(Event::Mouse(mouse)), Some(InputEvent::ScrollUp));
        mouse.kind = MouseEventKind::ScrollDown;
        assert_eq!(map_event(Event::Mouse(mouse)), Some(InputEvent::ScrollDown));
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(
            map_event(Event::Resize(100, 40)),
            Some(InputEvent::Resize(100, 40))
        );
    }
}
