//! Shared CallPitch library exports that keep the landing binary aligned on common behavior.

pub mod clock;
pub mod config;
pub mod doctor;
pub mod script;
pub mod sequencer;
pub mod session;
pub mod telemetry;
pub mod terminal_restore;
pub mod typewriter;

pub use config::{AppConfig, PacingProfile};
pub use script::{DemoScript, DialogueTurn, Speaker};
pub use sequencer::{CallSequencer, PlaybackTiming, PollResult, SequencerEvent};
pub use session::CallSession;
