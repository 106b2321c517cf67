use crate::view::{Frame, Hit};
use crate::word_model::ListKind;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What an input event asks the view controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    ToggleRotation,
    SelectList(ListKind),
    SwitchList,
    Redraw,
    Quit,
}

pub struct KeyHandler;

impl KeyHandler {
    /// Translate one raw event. Anything unrecognized maps to `None`.
    ///
    /// Mouse clicks are resolved against the last drawn `frame`; without one
    /// they are ignored.
    pub fn action_for_event(event: &Event, frame: Option<&Frame>) -> Option<Action> {
        match event {
            Event::Key(key_event) => Self::action_for_key(key_event),
            Event::Mouse(mouse_event) => Self::action_for_mouse(mouse_event, frame?),
            Event::Resize(_, _) => Some(Action::Redraw),
            _ => None,
        }
    }

    pub fn action_for_key(key_event: &KeyEvent) -> Option<Action> {
        // Release/repeat reports would otherwise handle one press twice
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        let modifiers = key_event.modifiers;
        match key_event.code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Char('l') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Redraw)
            }

            KeyCode::Left | KeyCode::Char('h') => Some(Action::Previous),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Next),
            KeyCode::Char(' ') => Some(Action::ToggleRotation),

            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchList),
            KeyCode::Char('1') => Some(Action::SelectList(ListKind::Palindromes)),
            KeyCode::Char('2') => Some(Action::SelectList(ListKind::Emordnilaps)),

            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    fn action_for_mouse(mouse_event: &MouseEvent, frame: &Frame) -> Option<Action> {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        match frame.hit(mouse_event.column, mouse_event.row)? {
            Hit::Tab(kind) => Some(Action::SelectList(kind)),
            Hit::Tiles => Some(Action::ToggleRotation),
        }
    }
}
