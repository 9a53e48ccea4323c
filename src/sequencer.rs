//! Call playback sequencing so the scripted demo unfolds on a cancellable schedule.
//!
//! The sequencer owns the session record, the transcript, and every pending
//! deadline for one simulated call. `start_call` precomputes the whole
//! turn-reveal schedule (turn k at `k * turn_gap`, plus one script-complete
//! marker after the trailing pause); `end_call` bumps a generation counter
//! that acts as the single cancellation handle — every pending cue and every
//! in-flight character reveal is stamped with the generation it belongs to,
//! so one bump invalidates all of them at once. Nothing here reads the wall
//! clock: callers inject `now`, which keeps the whole timeline testable.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::clock::{format_clock, whole_secs_between};
use crate::script::{DemoScript, DialogueTurn, Speaker};
use crate::session::CallSession;
use crate::typewriter::TypewriterLine;

/// Idle status shown before any call and after the end-grace reset.
pub const STATUS_IDLE: &str = "Click to start AI call";
/// Status while a call is live.
pub const STATUS_ACTIVE: &str = "Call Active - AI Assistant";
/// Status held between `end_call` and the idle reset.
pub const STATUS_ENDED: &str = "Call Ended";
/// Duration display when no call is running.
pub const DURATION_IDLE: &str = "00:00";

/// Delay before a newly appended entry starts typing.
const TYPE_SETTLE: Duration = Duration::from_millis(100);
/// How long "Call Ended" stays up before the display resets to idle.
const END_GRACE: Duration = Duration::from_secs(3);
/// Cadence of the elapsed-time display refresh.
const DURATION_TICK: Duration = Duration::from_secs(1);

/// Turn gap, trailing pause, and per-character interval for one pacing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    pub turn_gap: Duration,
    pub trailing_pause: Duration,
    pub char_interval: Duration,
}

impl PlaybackTiming {
    /// The page's default pacing: 3 s between turns, 2 s trailing pause.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            turn_gap: Duration::from_millis(3000),
            trailing_pause: Duration::from_millis(2000),
            char_interval: Duration::from_millis(50),
        }
    }

    /// The slower observed variant: 4 s between turns, 3 s trailing pause.
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            turn_gap: Duration::from_millis(4000),
            trailing_pause: Duration::from_millis(3000),
            char_interval: Duration::from_millis(50),
        }
    }

    #[must_use]
    pub fn with_char_interval(mut self, interval: Duration) -> Self {
        self.char_interval = interval;
        self
    }
}

/// One visible transcript entry and its typing state.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub turn_index: usize,
    pub turn: DialogueTurn,
    pub appended_at: Instant,
    generation: u64,
    typewriter: TypewriterLine,
}

impl TranscriptEntry {
    /// The currently typed-out prefix of the turn's text.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        self.typewriter.visible()
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.typewriter.is_complete()
    }
}

/// What `poll` observed becoming due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A scripted turn was appended to the transcript.
    TurnRevealed { index: usize, speaker: Speaker },
    /// Every turn has been revealed; the call stays open until ended.
    ScriptComplete,
    /// The end-grace window elapsed and the display returned to idle defaults.
    DisplayReset,
}

/// Outcome of one `poll` pass.
#[derive(Debug, Default)]
pub struct PollResult {
    pub events: Vec<SequencerEvent>,
    pub redraw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Reveal(usize),
    ScriptComplete,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledCue {
    at: Instant,
    generation: u64,
    cue: Cue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallPhase {
    Idle,
    Active,
    Ended { reset_at: Instant },
}

/// Drives one scripted demo call: owns the session, schedule, and transcript.
#[derive(Debug)]
pub struct CallSequencer {
    script: DemoScript,
    timing: PlaybackTiming,
    session: CallSession,
    phase: CallPhase,
    generation: u64,
    cues: VecDeque<ScheduledCue>,
    transcript: Vec<TranscriptEntry>,
    duration_display: String,
    next_duration_tick: Option<Instant>,
    script_complete: bool,
}

impl CallSequencer {
    #[must_use]
    pub fn new(script: DemoScript, timing: PlaybackTiming) -> Self {
        Self {
            script,
            timing,
            session: CallSession::new(),
            phase: CallPhase::Idle,
            generation: 0,
            cues: VecDeque::new(),
            transcript: Vec::new(),
            duration_display: DURATION_IDLE.to_string(),
            next_duration_tick: None,
            script_complete: false,
        }
    }

    /// Begin a call. No-op (returns `false`) while a call is already active.
    ///
    /// Clears prior transcript output, resets the turn index, arms the
    /// one-second duration tick, and enqueues the full reveal schedule.
    pub fn start_call(&mut self, now: Instant) -> bool {
        if !self.session.start(now) {
            return false;
        }
        self.generation += 1;
        self.phase = CallPhase::Active;
        self.transcript.clear();
        self.script_complete = false;
        self.duration_display = DURATION_IDLE.to_string();
        self.next_duration_tick = Some(now + DURATION_TICK);

        self.cues.clear();
        for index in 0..self.script.turn_count() {
            self.cues.push_back(ScheduledCue {
                at: now + self.timing.turn_gap * index as u32,
                generation: self.generation,
                cue: Cue::Reveal(index),
            });
        }
        if let Some(last) = self.script.turn_count().checked_sub(1) {
            self.cues.push_back(ScheduledCue {
                at: now + self.timing.turn_gap * last as u32 + self.timing.trailing_pause,
                generation: self.generation,
                cue: Cue::ScriptComplete,
            });
        }
        true
    }

    /// End the active call. No-op (returns `None`) while idle.
    ///
    /// Bumps the cancellation generation — pending reveals, the
    /// script-complete marker, the duration tick, and in-flight character
    /// reveals all die with the old generation. Returns the elapsed whole
    /// seconds of the ended call. The frozen transcript stays visible until
    /// the next `start_call`.
    pub fn end_call(&mut self, now: Instant) -> Option<u64> {
        if !self.session.is_active() {
            return None;
        }
        let elapsed = self
            .session
            .started_at()
            .map(|started| whole_secs_between(started, now))
            .unwrap_or_default();
        self.session.end();
        self.generation += 1;
        self.phase = CallPhase::Ended {
            reset_at: now + END_GRACE,
        };
        self.next_duration_tick = None;
        Some(elapsed)
    }

    /// Fire every deadline that is due at `now`, in order.
    pub fn poll(&mut self, now: Instant) -> PollResult {
        let mut result = PollResult::default();

        while let Some(front) = self.cues.front().copied() {
            if front.generation != self.generation {
                self.cues.pop_front();
                continue;
            }
            if front.at > now {
                break;
            }
            self.cues.pop_front();
            match front.cue {
                Cue::Reveal(index) => {
                    self.append_turn(index, front.at);
                    result.events.push(SequencerEvent::TurnRevealed {
                        index,
                        speaker: self.script.turns[index].speaker,
                    });
                    result.redraw = true;
                }
                Cue::ScriptComplete => {
                    self.script_complete = true;
                    result.events.push(SequencerEvent::ScriptComplete);
                    result.redraw = true;
                }
            }
        }

        if self.session.is_active() {
            if let (Some(tick_at), Some(started)) =
                (self.next_duration_tick, self.session.started_at())
            {
                if now >= tick_at {
                    let elapsed = whole_secs_between(started, now);
                    self.duration_display = format_clock(elapsed);
                    self.next_duration_tick =
                        Some(started + DURATION_TICK * (elapsed as u32 + 1));
                    result.redraw = true;
                }
            }
        }

        let generation = self.generation;
        for entry in &mut self.transcript {
            if entry.generation == generation && entry.typewriter.advance(now) {
                result.redraw = true;
            }
        }

        if let CallPhase::Ended { reset_at } = self.phase {
            if now >= reset_at {
                self.phase = CallPhase::Idle;
                self.duration_display = DURATION_IDLE.to_string();
                self.session.clear_started_at();
                result.events.push(SequencerEvent::DisplayReset);
                result.redraw = true;
            }
        }

        result
    }

    fn append_turn(&mut self, index: usize, revealed_at: Instant) {
        let turn = self.script.turns[index].clone();
        let typewriter = TypewriterLine::new(
            turn.text.clone(),
            revealed_at,
            TYPE_SETTLE,
            self.timing.char_interval,
        );
        self.transcript.push(TranscriptEntry {
            turn_index: index,
            turn,
            appended_at: revealed_at,
            generation: self.generation,
            typewriter,
        });
        self.session.advance_turn();
    }

    /// Status text for the demo panel, by phase.
    #[must_use]
    pub fn status_line(&self) -> &'static str {
        match self.phase {
            CallPhase::Idle => STATUS_IDLE,
            CallPhase::Active => STATUS_ACTIVE,
            CallPhase::Ended { .. } => STATUS_ENDED,
        }
    }

    /// Cached `MM:SS` elapsed display, refreshed on the one-second tick.
    #[must_use]
    pub fn duration_display(&self) -> &str {
        &self.duration_display
    }

    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// True once every turn has been revealed and the call is still open.
    #[must_use]
    pub fn conversation_complete(&self) -> bool {
        self.script_complete && self.session.is_active()
    }

    #[must_use]
    pub fn session(&self) -> &CallSession {
        &self.session
    }

    #[must_use]
    pub fn script(&self) -> &DemoScript {
        &self.script
    }

    #[must_use]
    pub fn timing(&self) -> PlaybackTiming {
        self.timing
    }

    /// True while anything time-driven is pending (used to keep the event
    /// loop redrawing without input).
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        if self.session.is_active() {
            return true;
        }
        matches!(self.phase, CallPhase::Ended { .. })
    }
}
