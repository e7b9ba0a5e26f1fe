//! Time-based slide and reveal tweens. Clock values are seconds from any monotonic origin.

use crate::domain::{Direction, Navigation, PageIndex};

pub const DEFAULT_SLIDE_SECS: f64 = 0.5;
pub const DEFAULT_SLIDE_DISTANCE: f32 = 1000.0;

const REVEAL_SECS: f64 = 0.3;
const REVEAL_RISE: f32 = 20.0;

/// Delay before the welcome hero starts fading in.
pub const HERO_REVEAL_DELAY: f64 = 0.2;

/// Delay before product card `position` starts fading in.
pub fn card_reveal_delay(position: usize) -> f64 {
    HERO_REVEAL_DELAY + 0.1 * position as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub enabled: bool,
    pub duration_secs: f64,
    pub distance: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: DEFAULT_SLIDE_SECS,
            distance: DEFAULT_SLIDE_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub page: PageIndex,
    pub x_offset: f32,
    pub opacity: f32,
}

impl Layer {
    fn settled(page: PageIndex) -> Self {
        Self {
            page,
            x_offset: 0.0,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub entering: Layer,
    pub exiting: Option<Layer>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Slide {
    exiting: PageIndex,
    /// Pose of the exiting page when the slide began; mid-flight if it interrupted another slide.
    exit_from: Layer,
    entering: PageIndex,
    direction: Direction,
    started_at: f64,
}

/// Drives at most one slide at a time. A new slide supersedes the running one.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    motion: MotionSettings,
    active: Option<Slide>,
}

impl SlideTransition {
    pub fn new(motion: MotionSettings) -> Self {
        Self {
            motion,
            active: None,
        }
    }

    pub fn motion(&self) -> MotionSettings {
        self.motion
    }

    pub fn begin(&mut self, navigation: Navigation, now: f64) {
        if !self.animates() {
            self.active = None;
            return;
        }

        // `from` is the page that was entering; a slide still in flight loses its exiting layer
        // and its entering page leaves from wherever it had got to.
        let exit_from = self.frame(navigation.from, now).entering;
        self.active = Some(Slide {
            exiting: navigation.from,
            exit_from,
            entering: navigation.to,
            direction: navigation.direction,
            started_at: now,
        });
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.active
            .as_ref()
            .is_some_and(|slide| self.progress(slide, now) < 1.0)
    }

    /// Layers to paint for `active`, the page the controller currently shows.
    pub fn frame(&self, active: PageIndex, now: f64) -> SlideFrame {
        let slide = match self.active {
            Some(slide) if slide.entering == active && self.animates() => slide,
            _ => {
                return SlideFrame {
                    entering: Layer::settled(active),
                    exiting: None,
                }
            }
        };

        let t = self.progress(&slide, now);
        if t >= 1.0 {
            return SlideFrame {
                entering: Layer::settled(active),
                exiting: None,
            };
        }

        let eased = ease_in_out_cubic(t) as f32;
        let distance = self.motion.distance * slide.direction.sign();

        SlideFrame {
            entering: Layer {
                page: slide.entering,
                x_offset: distance * (1.0 - eased),
                opacity: eased,
            },
            exiting: Some(Layer {
                page: slide.exiting,
                x_offset: lerp(slide.exit_from.x_offset, -distance, eased),
                opacity: slide.exit_from.opacity * (1.0 - eased),
            }),
        }
    }

    fn animates(&self) -> bool {
        self.motion.enabled && self.motion.duration_secs > 0.0
    }

    fn progress(&self, slide: &Slide, now: f64) -> f64 {
        if !self.animates() {
            return 1.0;
        }
        ((now - slide.started_at) / self.motion.duration_secs).clamp(0.0, 1.0)
    }
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self::new(MotionSettings::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub opacity: f32,
    pub y_offset: f32,
}

impl Reveal {
    pub const SETTLED: Reveal = Reveal {
        opacity: 1.0,
        y_offset: 0.0,
    };
}

/// Fade-up of a content block `elapsed` seconds after its page became active.
pub fn reveal(elapsed: f64, delay: f64) -> Reveal {
    let t = ((elapsed - delay) / REVEAL_SECS).clamp(0.0, 1.0);
    let eased = ease_out_cubic(t) as f32;
    Reveal {
        opacity: eased,
        y_offset: REVEAL_RISE * (1.0 - eased),
    }
}

/// Whether a reveal with the latest `delay` has finished.
pub fn reveal_done(elapsed: f64, delay: f64) -> bool {
    elapsed >= delay + REVEAL_SECS
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
