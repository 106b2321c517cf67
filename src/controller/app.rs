use super::input::{InputSource, TerminalSession};
use super::key_handler::{Action, KeyHandler};
use super::view_controller::ViewController;
use crate::error::Result;
use crate::view::{Frame, View, ViewOptions};
use crate::word_model::WordLists;
use crossterm::event::Event;
use tracing::{debug, info};

/// Anything a frame can be drawn onto
pub trait Surface {
    fn size(&self) -> Result<(u16, u16)>;
    fn draw(&mut self, frame: &Frame) -> Result<()>;
    fn force_redraw(&mut self);
}

impl Surface for View {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        Ok(self.render(frame)?)
    }

    fn force_redraw(&mut self) {
        View::force_redraw(self);
    }
}

/// Result of handling one input event
#[derive(Debug, PartialEq)]
pub enum Transition {
    Stay,
    Redraw,
    Quit,
}

pub struct App {
    controller: ViewController,
    options: ViewOptions,
    last_frame: Option<Frame>,
}

impl App {
    pub fn new(lists: WordLists, options: ViewOptions) -> Self {
        Self {
            controller: ViewController::new(lists),
            options,
            last_frame: None,
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// Attach to the terminal and run until the user quits. The terminal is
    /// restored when the session drops, including on error.
    pub fn run(mut self) -> Result<()> {
        let mut session = TerminalSession::acquire()?;
        let mut view = View::new();
        self.drive(&mut session, &mut view)
    }

    /// Process events one at a time: each is fully applied and drawn before
    /// the next one is read.
    pub fn drive(
        &mut self,
        input: &mut impl InputSource,
        surface: &mut impl Surface,
    ) -> Result<()> {
        self.draw(surface)?;

        while let Some(event) = input.next_event()? {
            match self.handle_event(&event) {
                Transition::Stay => {}
                Transition::Redraw => surface.force_redraw(),
                Transition::Quit => {
                    info!("quit requested");
                    return Ok(());
                }
            }
            self.draw(surface)?;
        }

        debug!("input exhausted");
        Ok(())
    }

    pub fn handle_event(&mut self, event: &Event) -> Transition {
        match KeyHandler::action_for_event(event, self.last_frame.as_ref()) {
            Some(action) => self.apply(action),
            None => Transition::Stay,
        }
    }

    fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::Previous => self.controller.previous(),
            Action::Next => self.controller.next(),
            Action::ToggleRotation => self.controller.toggle_rotation(),
            Action::SelectList(kind) => self.controller.select_list(kind),
            Action::SwitchList => {
                let other = self.controller.state().active.other();
                self.controller.select_list(other);
            }
            Action::Redraw => return Transition::Redraw,
            Action::Quit => return Transition::Quit,
        }
        Transition::Stay
    }

    fn draw(&mut self, surface: &mut impl Surface) -> Result<()> {
        let frame = Frame::compose(&self.controller, &self.options, surface.size()?);
        surface.draw(&frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }
}
