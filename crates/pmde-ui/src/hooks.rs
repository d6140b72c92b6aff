//! Rotation driver hook.
//!
//! ## Usage
//!
//! ```ignore
//! let rotation = use_rotation(slides.len(), RotationTiming::faded(300));
//!
//! rsx! {
//!     button { onclick: move |_| rotation.next(), "Next" }
//!     p { "{slides[rotation.index()].title}" }
//! }
//! ```

use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::{FutureExt, StreamExt};
use pmde_core::{Direction, Phase, RotationCommand, RotationTiming, Timeline};

use crate::timer::{now_ms, sleep_ms};

/// What woke the driver loop
enum Wake {
    Command(RotationCommand),
    Deadline,
    Closed,
}

/// Handle to a carousel's rotation state.
///
/// Reads subscribe the calling component to rotation changes; commands are
/// queued to the driver task, which applies them with the current time.
#[derive(Clone, Copy)]
pub struct RotationHandle {
    timeline: Signal<Timeline>,
    commands: Coroutine<RotationCommand>,
}

impl RotationHandle {
    pub fn index(&self) -> usize {
        self.timeline.read().index()
    }

    pub fn phase(&self) -> Phase {
        self.timeline.read().rotation().phase()
    }

    pub fn direction(&self) -> Direction {
        self.timeline.read().rotation().direction()
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.read().is_animating()
    }

    pub fn can_navigate(&self) -> bool {
        self.timeline.read().rotation().can_navigate()
    }

    pub fn send(&self, command: RotationCommand) {
        self.commands.send(command);
    }

    pub fn next(&self) {
        self.send(RotationCommand::Next);
    }

    pub fn previous(&self) {
        self.send(RotationCommand::Previous);
    }

    pub fn goto(&self, index: usize) {
        self.send(RotationCommand::Goto(index));
    }

    pub fn hover(&self, index: usize) {
        self.send(RotationCommand::Hover(index));
    }

    pub fn select(&self, index: usize) {
        self.send(RotationCommand::Select(index));
    }

    pub fn leave(&self) {
        self.send(RotationCommand::Leave);
    }

    pub fn reset(&self, len: usize) {
        self.send(RotationCommand::Reset(len));
    }
}

/// Create a rotation over `len` slides with the given timing.
///
/// The driver task sleeps until the timeline's next deadline or the next
/// command, whichever comes first. It is owned by the calling component and
/// dropped with it, so no tick can reach an unmounted carousel.
pub fn use_rotation(len: usize, timing: RotationTiming) -> RotationHandle {
    let mut timeline = use_signal(|| Timeline::new(len, timing, now_ms()));

    let commands = use_coroutine(move |mut rx: UnboundedReceiver<RotationCommand>| async move {
        loop {
            let deadline = timeline.peek().next_deadline();
            let wake = match deadline {
                Some(at) => {
                    let mut sleep = Box::pin(sleep_ms(at.saturating_sub(now_ms())).fuse());
                    futures::select! {
                        command = rx.next() => match command {
                            Some(command) => Wake::Command(command),
                            None => Wake::Closed,
                        },
                        _ = sleep => Wake::Deadline,
                    }
                }
                None => match rx.next().await {
                    Some(command) => Wake::Command(command),
                    None => Wake::Closed,
                },
            };

            let now = now_ms();
            match wake {
                Wake::Command(command) => {
                    timeline.write().apply(command, now);
                }
                Wake::Deadline => {
                    timeline.write().advance_to(now);
                }
                Wake::Closed => break,
            }
        }
        tracing::trace!("rotation driver stopped");
    });

    RotationHandle { timeline, commands }
}
