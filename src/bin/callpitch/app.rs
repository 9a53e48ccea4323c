//! Page application state: owns the sequencer and every animated widget.

use std::time::Instant;

use tracing::debug;

use callpitch::{CallSequencer, SequencerEvent};

use crate::demo_stats::DemoStats;
use crate::input::InputEvent;
use crate::notices::NoticeCenter;
use crate::page::{PageState, Section};
use crate::particles::ParticleField;
use crate::phone_mockup::PhoneMockup;
use crate::stats_counters::HeroStats;
use crate::theme::{GlyphSet, Theme};
use crate::ui;

pub(crate) struct AppState {
    pub(crate) sequencer: CallSequencer,
    pub(crate) page: PageState,
    pub(crate) particles: ParticleField,
    pub(crate) hero_stats: HeroStats,
    pub(crate) mockup: PhoneMockup,
    pub(crate) notices: NoticeCenter,
    pub(crate) demo_stats: DemoStats,
    pub(crate) theme: Theme,
    pub(crate) glyphs: GlyphSet,
    pub(crate) reduced_motion: bool,
    log_timings: bool,
    pub(crate) viewport: (u16, u16),
    pub(crate) started_at: Instant,
    quit: bool,
}

impl AppState {
    pub(crate) fn new(
        sequencer: CallSequencer,
        theme: Theme,
        glyphs: GlyphSet,
        reduced_motion: bool,
        log_timings: bool,
        now: Instant,
    ) -> Self {
        Self {
            sequencer,
            page: PageState::new(),
            particles: ParticleField::new(!reduced_motion),
            hero_stats: HeroStats::new(),
            mockup: PhoneMockup::new(),
            notices: NoticeCenter::new(),
            demo_stats: DemoStats::new(now),
            theme,
            glyphs,
            reduced_motion,
            log_timings,
            viewport: (80, 24),
            started_at: now,
            quit: false,
        }
    }

    #[must_use]
    pub(crate) fn should_quit(&self) -> bool {
        self.quit
    }

    /// Rows available to the scrolling page body.
    fn body_height(&self) -> u16 {
        self.viewport.1.saturating_sub(2).max(1)
    }

    fn start_call(&mut self, now: Instant) {
        if self.sequencer.start_call(now) {
            self.demo_stats.record_call_started();
            debug!(call = self.demo_stats.calls_started(), "call started");
        } else {
            self.notices.warning("Call already in progress", now);
        }
    }

    fn end_call(&mut self, now: Instant) {
        match self.sequencer.end_call(now) {
            Some(duration_secs) => {
                self.demo_stats.record_call_ended(duration_secs);
                debug!(duration_secs, "call ended");
            }
            None => self.notices.info("No active call", now),
        }
    }

    /// Apply one input event; returns true when a redraw is needed.
    pub(crate) fn apply_input(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::Quit => {
                self.quit = true;
                false
            }
            InputEvent::Escape => {
                if self.sequencer.is_active() {
                    self.notices.info("Press E to end the call first", now);
                } else {
                    self.quit = true;
                }
                true
            }
            InputEvent::StartCall => {
                self.page.jump_to(Section::Demo, now);
                self.start_call(now);
                true
            }
            InputEvent::EndCall => {
                self.end_call(now);
                true
            }
            InputEvent::HeroCta => {
                if self.sequencer.is_active() {
                    self.page.jump_to(Section::Demo, now);
                } else {
                    self.page.arm_cta(now);
                }
                true
            }
            InputEvent::AcceptMockup => {
                self.mockup.accept(now);
                true
            }
            InputEvent::DeclineMockup => {
                self.mockup.decline(now);
                true
            }
            InputEvent::ThemeCycle => {
                self.theme = self.theme.next();
                self.notices
                    .success(format!("Theme: {}", self.theme.name()), now);
                true
            }
            InputEvent::MotionToggle => {
                self.reduced_motion = !self.reduced_motion;
                self.particles.set_enabled(!self.reduced_motion);
                let message = if self.reduced_motion {
                    "Motion reduced"
                } else {
                    "Motion restored"
                };
                self.notices.info(message, now);
                true
            }
            InputEvent::DismissNotice => self.notices.dismiss_latest(),
            InputEvent::NextSection => {
                self.page.jump_to(self.page.active_section().next(), now);
                true
            }
            InputEvent::PrevSection => {
                self.page.jump_to(self.page.active_section().prev(), now);
                true
            }
            InputEvent::JumpSection(index) => {
                if let Some(section) = Section::from_index(index) {
                    self.page.jump_to(section, now);
                }
                true
            }
            InputEvent::ScrollUp => {
                self.page.scroll_by(-1.0, self.body_height());
                true
            }
            InputEvent::ScrollDown => {
                self.page.scroll_by(1.0, self.body_height());
                true
            }
            InputEvent::PageUp => {
                self.page
                    .scroll_by(-f32::from(self.body_height()), self.body_height());
                true
            }
            InputEvent::PageDown => {
                self.page
                    .scroll_by(f32::from(self.body_height()), self.body_height());
                true
            }
            InputEvent::Home => {
                self.page.jump_to(Section::Hero, now);
                true
            }
            InputEvent::End => {
                self.page
                    .scroll_by(f32::from(crate::page::page_height()), self.body_height());
                true
            }
            InputEvent::MouseClick { x, y } => self.handle_click(x, y, now),
            InputEvent::Resize(width, height) => {
                self.viewport = (width, height);
                true
            }
        }
    }

    fn handle_click(&mut self, x: u16, y: u16, now: Instant) -> bool {
        // Row 0 is the navbar; its tabs jump to sections.
        if y == 0 {
            if let Some(section) = ui::navbar::section_at_column(x, self.viewport.0) {
                self.page.jump_to(section, now);
                return true;
            }
            return false;
        }
        // Body rows below the navbar and above the status bar.
        if y >= self.viewport.1.saturating_sub(1) {
            return false;
        }
        let virtual_row = self.page.scroll_rows(self.body_height()) + (y - 1);
        let demo = Section::Demo;
        let in_demo = virtual_row >= demo.offset() && virtual_row < demo.offset() + demo.height();
        if in_demo && !self.sequencer.is_active() {
            self.start_call(now);
            return true;
        }
        false
    }

    /// Advance all timed state; returns true when a redraw is needed.
    pub(crate) fn step(&mut self, now: Instant) -> bool {
        let mut redraw = false;

        let poll = self.sequencer.poll(now);
        redraw |= poll.redraw;
        for event in poll.events {
            match event {
                SequencerEvent::TurnRevealed { index, speaker } => {
                    self.demo_stats.record_turn_revealed();
                    if self.log_timings {
                        debug!(index, speaker = speaker.label(), "turn revealed");
                    }
                }
                SequencerEvent::ScriptComplete => {
                    self.demo_stats.record_conversation_completed();
                    self.notices
                        .info("Conversation complete - press E to end the call", now);
                    if self.log_timings {
                        debug!("script complete");
                    }
                }
                SequencerEvent::DisplayReset => {}
            }
        }

        if self.page.take_due_cta(now) {
            self.start_call(now);
            redraw = true;
        }

        redraw |= self.page.step(now, self.body_height());
        if self.page.is_revealed(Section::Hero) {
            self.hero_stats.arm(now);
        }
        redraw |= self.hero_stats.step(now);
        redraw |= self.mockup.step(now);
        redraw |= self.notices.step(now);

        // Particles animate continuously while the hero band is on screen.
        let hero_visible = self.page.scroll_rows(self.body_height()) < Section::Hero.height();
        if hero_visible && self.particles.is_enabled() {
            redraw = true;
        }
        redraw
    }
}
