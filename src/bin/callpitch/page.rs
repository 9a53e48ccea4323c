//! Virtual page geometry: fixed-height sections, smooth scroll, reveal state.

use std::time::Instant;

/// Sections of the landing page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Hero,
    Features,
    Demo,
    Technology,
}

impl Section {
    pub(crate) const COUNT: usize = 4;

    pub(crate) fn all() -> [Section; Self::COUNT] {
        [Self::Hero, Self::Features, Self::Demo, Self::Technology]
    }

    pub(crate) fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Features => 1,
            Self::Demo => 2,
            Self::Technology => 3,
        }
    }

    /// Rows this section occupies in the virtual page.
    #[must_use]
    pub(crate) fn height(self) -> u16 {
        match self {
            Self::Hero => 16,
            Self::Features => 14,
            Self::Demo => 20,
            Self::Technology => 10,
        }
    }

    /// Row where this section starts in the virtual page.
    #[must_use]
    pub(crate) fn offset(self) -> u16 {
        Self::all()
            .iter()
            .take(self.index())
            .map(|section| section.height())
            .sum()
    }

    #[must_use]
    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Features => "Features",
            Self::Demo => "Demo",
            Self::Technology => "Technology",
        }
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Self::Hero)
    }

    #[must_use]
    pub(crate) fn prev(self) -> Self {
        Self::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Self::Hero)
    }
}

/// Total height of the virtual page in rows.
pub(crate) fn page_height() -> u16 {
    Section::all().iter().map(|section| section.height()).sum()
}

const GLIDE_DURATION_MS: u64 = 400;
const NAVBAR_SCROLL_THRESHOLD: f32 = 4.0;
const CTA_SETTLE_MS: u64 = 1000;

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    started: Instant,
}

/// Scroll position, glide animation, and one-time section reveals.
#[derive(Debug)]
pub(crate) struct PageState {
    scroll: f32,
    glide: Option<Glide>,
    revealed: [bool; Section::COUNT],
    cta_start_at: Option<Instant>,
}

fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

impl PageState {
    pub(crate) fn new() -> Self {
        Self {
            scroll: 0.0,
            glide: None,
            revealed: [false; Section::COUNT],
            cta_start_at: None,
        }
    }

    fn max_scroll(viewport_height: u16) -> f32 {
        f32::from(page_height().saturating_sub(viewport_height.max(1)))
    }

    /// Current scroll offset as whole rows for the renderer.
    #[must_use]
    pub(crate) fn scroll_rows(&self, viewport_height: u16) -> u16 {
        let clamped = self.scroll.clamp(0.0, Self::max_scroll(viewport_height));
        clamped.round() as u16
    }

    /// Begin a glide to put `section`'s first row at the top of the viewport.
    pub(crate) fn jump_to(&mut self, section: Section, now: Instant) {
        let target = f32::from(section.offset());
        if (target - self.scroll).abs() < 0.5 {
            self.glide = None;
            self.scroll = target;
            return;
        }
        self.glide = Some(Glide {
            from: self.scroll,
            to: target,
            started: now,
        });
    }

    /// Scroll by raw rows, cancelling any glide in flight.
    pub(crate) fn scroll_by(&mut self, delta: f32, viewport_height: u16) {
        self.glide = None;
        self.scroll = (self.scroll + delta).clamp(0.0, Self::max_scroll(viewport_height));
    }

    /// Advance animations; returns true when the page needs a redraw.
    pub(crate) fn step(&mut self, now: Instant, viewport_height: u16) -> bool {
        let mut redraw = false;
        if let Some(glide) = self.glide {
            let elapsed = now.saturating_duration_since(glide.started).as_millis() as f32;
            let t = (elapsed / GLIDE_DURATION_MS as f32).min(1.0);
            self.scroll = glide.from + (glide.to - glide.from) * ease_in_out_quad(t);
            if t >= 1.0 {
                self.scroll = glide.to;
                self.glide = None;
            }
            redraw = true;
        }
        self.scroll = self.scroll.clamp(0.0, Self::max_scroll(viewport_height));

        // Sections reveal once, the first time their top row enters the viewport.
        let top = self.scroll;
        let bottom = top + f32::from(viewport_height);
        for section in Section::all() {
            let index = section.index();
            if !self.revealed[index] && f32::from(section.offset()) < bottom {
                self.revealed[index] = true;
                redraw = true;
            }
        }
        redraw
    }

    /// True once the page has scrolled past the navbar emphasis threshold.
    #[must_use]
    pub(crate) fn navbar_scrolled(&self) -> bool {
        self.scroll > NAVBAR_SCROLL_THRESHOLD
    }

    /// The section whose band covers the top of the viewport.
    #[must_use]
    pub(crate) fn active_section(&self) -> Section {
        let row = self.scroll.round() as u16;
        let mut active = Section::Hero;
        for section in Section::all() {
            if row >= section.offset() {
                active = section;
            }
        }
        active
    }

    #[must_use]
    pub(crate) fn is_revealed(&self, section: Section) -> bool {
        self.revealed[section.index()]
    }

    /// Hero CTA: glide to the demo section and schedule a call start for
    /// after the glide settles.
    pub(crate) fn arm_cta(&mut self, now: Instant) {
        self.jump_to(Section::Demo, now);
        self.cta_start_at =
            Some(now + std::time::Duration::from_millis(CTA_SETTLE_MS));
    }

    /// True exactly once, when the armed CTA start time passes.
    pub(crate) fn take_due_cta(&mut self, now: Instant) -> bool {
        match self.cta_start_at {
            Some(at) if now >= at => {
                self.cta_start_at = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub(crate) fn cta_pending(&self) -> bool {
        self.cta_start_at.is_some()
    }

    #[must_use]
    pub(crate) fn glide_active(&self) -> bool {
        self.glide.is_some()
    }
}
