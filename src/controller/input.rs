use crate::error::{Result, TilesError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};
use std::io::{stdin, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Where input events come from. `Ok(None)` means the source is exhausted.
pub trait InputSource {
    fn next_event(&mut self) -> Result<Option<Event>>;
}

/// At most one listener may hold a slot at a time.
pub struct ListenerSlot {
    attached: AtomicBool,
}

impl ListenerSlot {
    pub const fn new() -> Self {
        Self {
            attached: AtomicBool::new(false),
        }
    }

    pub fn claim(&self) -> Result<SlotGuard<'_>> {
        self.attached
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| TilesError::AlreadyAttached)?;
        Ok(SlotGuard { slot: self })
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }
}

/// Releases its slot on drop
pub struct SlotGuard<'a> {
    slot: &'a ListenerSlot,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.slot.attached.store(false, Ordering::Release);
    }
}

static TERMINAL_SLOT: ListenerSlot = ListenerSlot::new();

/// The live terminal: raw mode, alternate screen and mouse capture for as
/// long as the value lives.
pub struct TerminalSession {
    // Dropped after `Drop::drop` has restored the terminal
    _slot: SlotGuard<'static>,
}

impl TerminalSession {
    pub fn acquire() -> Result<Self> {
        require_terminal(stdin().is_tty(), stdout().is_tty())?;
        let slot = TERMINAL_SLOT.claim()?;

        enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        debug!("terminal session attached");
        Ok(Self { _slot: slot })
    }
}

/// Both ends must be a live terminal; a redirected stdout would collect
/// escape codes.
fn require_terminal(stdin_is_tty: bool, stdout_is_tty: bool) -> Result<()> {
    if stdin_is_tty && stdout_is_tty {
        Ok(())
    } else {
        Err(TilesError::NoTerminal)
    }
}

impl InputSource for TerminalSession {
    fn next_event(&mut self) -> Result<Option<Event>> {
        Ok(Some(event::read()?))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            warn!("failed to disable raw mode: {}", e);
        }
        debug!("terminal session released");
    }
}

/// Replays a fixed list of events, then reports exhaustion.
#[cfg(test)]
pub struct ScriptedInput {
    events: std::collections::VecDeque<Event>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}
