//! Pointer/touch/navigation driven interaction state.
//!
//! The machine owns the mode and the Julia seed. Transitions are looked up in
//! [`TRANSITIONS`], a plain table keyed by event kind and current mode; any
//! pair without a row is a no-op. Side effects the host has to carry out
//! (pointer lock, fragment writes, tutorial overlay) come back as
//! [`HostCommand`]s.

use crate::config::ViewConfig;
use crate::constants::{BUTTON_PRIMARY, BUTTON_SECONDARY};
use crate::coords::{to_plane, to_plane_delta, PlaneCoordinate, ViewportSource};
use crate::url_state::UrlStateSync;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    #[inline]
    pub fn from_dom(code: i16) -> Self {
        match code {
            BUTTON_PRIMARY => Self::Primary,
            BUTTON_SECONDARY => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

/// Normalized input. Positions and deltas are CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    /// `delta` is present when the platform reports movement deltas.
    PointerMove {
        x: f64,
        y: f64,
        delta: Option<(f64, f64)>,
    },
    PointerUp {
        button: PointerButton,
    },
    TouchStart {
        x: f64,
        y: f64,
    },
    TouchMove {
        x: f64,
        y: f64,
    },
    TouchEnd,
    Navigate {
        fragment: String,
    },
    Unlock,
    /// The platform dropped relative-motion capture on its own.
    RelativeMotionLost,
}

/// Event classes the transition table is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    PrimaryPress,
    SecondaryPress,
    Move,
    PrimaryRelease,
    Navigate,
    Unlock,
    RelativeMotionLost,
}

impl InputEvent {
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Self::PointerDown { button, .. } => match button {
                PointerButton::Primary => Some(EventKind::PrimaryPress),
                PointerButton::Secondary => Some(EventKind::SecondaryPress),
                PointerButton::Other(_) => None,
            },
            Self::PointerUp { button } => {
                (*button == PointerButton::Primary).then_some(EventKind::PrimaryRelease)
            }
            Self::TouchStart { .. } => Some(EventKind::PrimaryPress),
            Self::PointerMove { .. } | Self::TouchMove { .. } => Some(EventKind::Move),
            Self::TouchEnd => Some(EventKind::PrimaryRelease),
            Self::Navigate { .. } => Some(EventKind::Navigate),
            Self::Unlock => Some(EventKind::Unlock),
            Self::RelativeMotionLost => Some(EventKind::RelativeMotionLost),
        }
    }

    fn position(&self) -> Option<(f64, f64)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::TouchStart { x, y }
            | Self::TouchMove { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    fn source(&self) -> InputSource {
        match self {
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd => InputSource::Touch,
            _ => InputSource::Mouse,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    Dragging,
    Locked,
}

/// Current mode together with the seed it carries.
///
/// `Idle` keeps the last seed for display continuity only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionMode {
    Idle(PlaneCoordinate),
    Dragging(PlaneCoordinate),
    Locked(PlaneCoordinate),
}

impl InteractionMode {
    pub fn from_kind(kind: ModeKind, seed: PlaneCoordinate) -> Self {
        match kind {
            ModeKind::Idle => Self::Idle(seed),
            ModeKind::Dragging => Self::Dragging(seed),
            ModeKind::Locked => Self::Locked(seed),
        }
    }

    #[inline]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Idle(_) => ModeKind::Idle,
            Self::Dragging(_) => ModeKind::Dragging,
            Self::Locked(_) => ModeKind::Locked,
        }
    }

    #[inline]
    pub fn seed(&self) -> PlaneCoordinate {
        match *self {
            Self::Idle(s) | Self::Dragging(s) | Self::Locked(s) => s,
        }
    }
}

/// Which writer owns the seed during a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionSource {
    Absolute,
    Relative,
}

/// Side effects requested from the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCommand {
    RequestRelativeMotion,
    ReleaseRelativeMotion,
    /// Replace the URL fragment; empty clears it.
    WriteFragment(String),
    HideTutorial { instant: bool },
}

pub type HostCommands = SmallVec<[HostCommand; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StartDrag,
    UnlockThenStartDrag,
    Track,
    EndDrag,
    Lock,
    RestoreLock,
    Unlock,
    FallBackToAbsolute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub event: EventKind,
    pub from: ModeKind,
    pub to: ModeKind,
    pub action: Action,
}

const fn row(event: EventKind, from: ModeKind, to: ModeKind, action: Action) -> Transition {
    Transition {
        event,
        from,
        to,
        action,
    }
}

pub const TRANSITIONS: &[Transition] = &[
    row(EventKind::PrimaryPress, ModeKind::Idle, ModeKind::Dragging, Action::StartDrag),
    row(
        EventKind::PrimaryPress,
        ModeKind::Locked,
        ModeKind::Dragging,
        Action::UnlockThenStartDrag,
    ),
    row(EventKind::Move, ModeKind::Dragging, ModeKind::Dragging, Action::Track),
    row(EventKind::PrimaryRelease, ModeKind::Dragging, ModeKind::Idle, Action::EndDrag),
    row(EventKind::SecondaryPress, ModeKind::Dragging, ModeKind::Locked, Action::Lock),
    row(EventKind::Navigate, ModeKind::Idle, ModeKind::Locked, Action::RestoreLock),
    row(EventKind::Navigate, ModeKind::Dragging, ModeKind::Locked, Action::RestoreLock),
    row(EventKind::Navigate, ModeKind::Locked, ModeKind::Locked, Action::RestoreLock),
    row(EventKind::Unlock, ModeKind::Locked, ModeKind::Idle, Action::Unlock),
    row(
        EventKind::RelativeMotionLost,
        ModeKind::Dragging,
        ModeKind::Dragging,
        Action::FallBackToAbsolute,
    ),
];

#[inline]
pub fn lookup(event: EventKind, from: ModeKind) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.event == event && t.from == from)
}

pub struct InteractionStateMachine {
    config: ViewConfig,
    mode: InteractionMode,
    motion: MotionSource,
    relative_motion_supported: bool,
    url: UrlStateSync,
}

impl InteractionStateMachine {
    pub fn new(config: ViewConfig, relative_motion_supported: bool) -> Self {
        Self {
            config,
            mode: InteractionMode::Idle(PlaneCoordinate::default()),
            motion: MotionSource::Absolute,
            relative_motion_supported,
            url: UrlStateSync::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[inline]
    pub fn seed(&self) -> PlaneCoordinate {
        self.mode.seed()
    }

    #[inline]
    pub fn motion(&self) -> MotionSource {
        self.motion
    }

    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The fragment the session currently reflects, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.url.current()
    }

    /// Apply one event. Returns the commands the host must execute, in order.
    pub fn handle<V: ViewportSource + ?Sized>(
        &mut self,
        event: &InputEvent,
        viewport: &V,
    ) -> HostCommands {
        let mut commands = HostCommands::new();
        let Some(kind) = event.kind() else {
            return commands;
        };
        let from = self.mode.kind();
        let Some(transition) = lookup(kind, from) else {
            log::debug!("[input] {:?} ignored while {:?}", kind, from);
            return commands;
        };
        if let Some(seed) = self.apply(transition.action, event, viewport, &mut commands) {
            self.mode = InteractionMode::from_kind(transition.to, seed);
        }
        commands
    }

    /// Run an action. `None` vetoes the transition and leaves the mode as is.
    fn apply<V: ViewportSource + ?Sized>(
        &mut self,
        action: Action,
        event: &InputEvent,
        viewport: &V,
        commands: &mut HostCommands,
    ) -> Option<PlaneCoordinate> {
        match action {
            Action::StartDrag => self.start_drag(event, viewport, commands),
            Action::UnlockThenStartDrag => {
                self.unlock(commands);
                self.start_drag(event, viewport, commands)
            }
            Action::Track => Some(self.track(event, viewport)),
            Action::EndDrag => {
                self.release_relative(commands);
                log::debug!("[input] drag ended at {:?}", self.seed());
                Some(self.seed())
            }
            Action::Lock => {
                self.release_relative(commands);
                let seed = self.seed();
                let fragment = self.url.record_lock(seed);
                log::info!("[input] locked seed {}", fragment);
                commands.push(HostCommand::WriteFragment(fragment));
                Some(seed)
            }
            Action::RestoreLock => {
                let InputEvent::Navigate { fragment } = event else {
                    return None;
                };
                let seed = self.url.accept_navigation(fragment)?;
                self.release_relative(commands);
                log::info!("[url] restored locked seed {:?}", seed);
                commands.push(HostCommand::HideTutorial { instant: true });
                Some(seed)
            }
            Action::Unlock => {
                self.unlock(commands);
                Some(self.seed())
            }
            Action::FallBackToAbsolute => {
                self.motion = MotionSource::Absolute;
                log::debug!("[input] relative motion lost, tracking absolute");
                Some(self.seed())
            }
        }
    }

    fn start_drag<V: ViewportSource + ?Sized>(
        &mut self,
        event: &InputEvent,
        viewport: &V,
        commands: &mut HostCommands,
    ) -> Option<PlaneCoordinate> {
        let (x, y) = event.position()?;
        let seed = self.map_absolute(viewport, x, y);
        commands.push(HostCommand::HideTutorial { instant: false });
        if self.relative_motion_supported && event.source() == InputSource::Mouse {
            self.motion = MotionSource::Relative;
            commands.push(HostCommand::RequestRelativeMotion);
        } else {
            self.motion = MotionSource::Absolute;
        }
        log::debug!("[input] drag started at {:?} ({:?})", seed, self.motion);
        Some(seed)
    }

    fn track<V: ViewportSource + ?Sized>(&self, event: &InputEvent, viewport: &V) -> PlaneCoordinate {
        let seed = self.seed();
        match (self.motion, event) {
            (MotionSource::Relative, InputEvent::PointerMove { delta: Some((dx, dy)), .. }) => {
                let geometry = viewport.geometry();
                seed + to_plane_delta(&geometry, self.config.zoom, *dx, *dy)
            }
            (MotionSource::Absolute, _) => match event.position() {
                Some((x, y)) => self.map_absolute(viewport, x, y),
                None => seed,
            },
            // Relative capture owns the seed; absolute-only moves are dropped.
            (MotionSource::Relative, _) => seed,
        }
    }

    fn unlock(&mut self, commands: &mut HostCommands) {
        let fragment = self.url.record_unlock();
        self.mode = InteractionMode::Idle(self.seed());
        log::info!("[input] unlocked");
        commands.push(HostCommand::WriteFragment(fragment));
    }

    fn release_relative(&mut self, commands: &mut HostCommands) {
        if self.motion == MotionSource::Relative {
            commands.push(HostCommand::ReleaseRelativeMotion);
        }
        self.motion = MotionSource::Absolute;
    }

    #[inline]
    fn map_absolute<V: ViewportSource + ?Sized>(&self, viewport: &V, x: f64, y: f64) -> PlaneCoordinate {
        let geometry = viewport.geometry();
        to_plane(&geometry, self.config.zoom, self.config.offset, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_event_and_mode() {
        for (i, a) in TRANSITIONS.iter().enumerate() {
            for b in &TRANSITIONS[i + 1..] {
                assert!(
                    !(a.event == b.event && a.from == b.from),
                    "duplicate row for {:?} from {:?}",
                    a.event,
                    a.from
                );
            }
        }
    }

    #[test]
    fn press_while_dragging_has_no_row() {
        assert!(lookup(EventKind::PrimaryPress, ModeKind::Dragging).is_none());
    }

    #[test]
    fn navigation_locks_from_every_mode() {
        for from in [ModeKind::Idle, ModeKind::Dragging, ModeKind::Locked] {
            let t = lookup(EventKind::Navigate, from).expect("row");
            assert_eq!(t.to, ModeKind::Locked);
        }
    }

    #[test]
    fn dom_button_codes() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Other(1));
    }
}
