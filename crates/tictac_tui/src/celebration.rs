//! Win celebration: falling confetti and a growing, spinning banner.
//!
//! Both effects are stepped once per tick by the app and rendered by
//! the UI. Nothing here knows about the board.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use tictac_core::Mark;
use tracing::{instrument, trace};

const GLYPHS: [char; 6] = ['*', '+', 'o', '•', '◆', '▪'];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// One confetti piece in normalized screen coordinates.
///
/// `x` and `y` are fractions of the render area; `y < 0` is above the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: char,
    color: Color,
}

impl Particle {
    fn spawn(rng: &mut StdRng, y: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y,
            vx: rng.gen_range(-0.004..0.004),
            vy: rng.gen_range(0.01..0.035),
            glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            color: COLORS[rng.gen_range(0..COLORS.len())],
        }
    }
}

/// Confetti that keeps falling until the celebration ends.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Confetti {
    /// Creates `count` particles scattered above the top edge.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let y = rng.gen_range(-1.0..0.0);
                Particle::spawn(&mut rng, y)
            })
            .collect();
        Self { particles, rng }
    }

    /// Advances every particle; pieces that fall off the bottom respawn at the top.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x = (p.x + p.vx).rem_euclid(1.0);
            // rem_euclid can round up to exactly 1.0 for tiny negatives.
            if p.x >= 1.0 {
                p.x = 0.0;
            }
            p.y += p.vy;
            if p.y >= 1.0 {
                *p = Particle::spawn(&mut self.rng, 0.0);
            }
        }
    }

    /// The particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        for p in &self.particles {
            if !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let x = area.x + (p.x * f32::from(area.width)) as u16;
            let y = area.y + (p.y * f32::from(area.height)) as u16;
            if x < area.right()
                && y < area.bottom()
                && let Some(cell) = buf.cell_mut((x, y))
            {
                cell.set_char(p.glyph).set_fg(p.color);
            }
        }
    }
}

/// State of an ongoing win celebration.
#[derive(Debug, Clone)]
pub struct Celebration {
    winner: Mark,
    ticks: u16,
    banner_ticks: u16,
    confetti: Option<Confetti>,
}

impl Celebration {
    /// Starts a celebration for `winner`.
    ///
    /// `particles == 0` disables confetti; `banner_ticks` is how long the
    /// banner takes to reach full size.
    #[instrument]
    pub fn new(winner: Mark, particles: usize, banner_ticks: u16, seed: u64) -> Self {
        Self {
            winner,
            ticks: 0,
            banner_ticks: banner_ticks.max(1),
            confetti: (particles > 0).then(|| Confetti::new(particles, seed)),
        }
    }

    /// Advances the animation by one tick.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
        if let Some(confetti) = &mut self.confetti {
            confetti.step();
        }
        trace!(ticks = self.ticks, "Celebration tick");
    }

    /// The winning mark.
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// Banner growth from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        (f32::from(self.ticks) / f32::from(self.banner_ticks)).min(1.0)
    }

    /// Whether the banner has finished growing.
    pub fn settled(&self) -> bool {
        self.ticks >= self.banner_ticks
    }

    /// The banner at its current size.
    ///
    /// While growing, the visible middle slice widens with progress and a
    /// spinner turns on both sides.
    pub fn banner_text(&self) -> String {
        let full: Vec<char> = format!("🎉 {} Wins! 🎉", self.winner).chars().collect();
        if self.settled() {
            return full.into_iter().collect();
        }

        let visible = ((full.len() as f32) * self.progress()).ceil() as usize;
        let start = (full.len() - visible) / 2;
        let middle: String = full[start..start + visible].iter().collect();
        let spin = SPINNER[usize::from(self.ticks) % SPINNER.len()];
        format!("{spin} {middle} {spin}")
    }

    /// Confetti, if enabled.
    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_grows_then_settles() {
        let mut c = Celebration::new(Mark::X, 0, 4, 7);
        assert_eq!(c.progress(), 0.0);
        assert!(!c.banner_text().contains("Wins"));

        c.tick();
        c.tick();
        assert!(!c.settled());
        let half = c.banner_text();
        assert!(half.starts_with('-'));

        c.tick();
        c.tick();
        assert!(c.settled());
        assert_eq!(c.banner_text(), "🎉 X Wins! 🎉");

        c.tick();
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn test_zero_particles_disables_confetti() {
        assert!(Celebration::new(Mark::O, 0, 10, 1).confetti().is_none());
        assert_eq!(
            Celebration::new(Mark::O, 25, 10, 1)
                .confetti()
                .map(|c| c.particles().len()),
            Some(25)
        );
    }

    #[test]
    fn test_particles_fall_and_stay_in_bounds() {
        let mut confetti = Confetti::new(50, 42);
        for _ in 0..500 {
            confetti.step();
            for p in confetti.particles() {
                assert!((0.0..1.0).contains(&p.x));
                assert!(p.y < 1.0);
            }
        }
    }

    #[test]
    fn test_render_stays_inside_area() {
        let mut confetti = Confetti::new(200, 3);
        for _ in 0..60 {
            confetti.step();
        }
        let area = Rect::new(2, 1, 10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 14, 8));
        (&confetti).render(area, &mut buf);

        for y in 0..8 {
            for x in 0..14 {
                let inside = x >= 2 && x < 12 && y >= 1 && y < 6;
                if !inside {
                    assert_eq!(buf[(x, y)].symbol(), " ", "({x},{y})");
                }
            }
        }
    }
}
