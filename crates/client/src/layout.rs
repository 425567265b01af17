use ct_core::LAYOUT_DECAY;
use ct_core::LAYOUT_SNAP;
use ct_core::Pixels;
use ct_core::Point;

/// Where the local hand lives on screen and how fast cards settle into it.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Vertical center of the hand band.
    pub band: Pixels,
    /// Horizontal extent of the slot row.
    pub left: Pixels,
    pub right: Pixels,
    /// Exponential decay rate for the per-frame catch-up fraction.
    pub decay: f32,
    /// Residual distance below which a card is considered settled.
    pub snap: Pixels,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            band: 400.0,
            left: 20.0,
            right: 380.0,
            decay: LAYOUT_DECAY,
            snap: LAYOUT_SNAP,
        }
    }
}

impl Layout {
    /// Evenly spaced slot centers for a hand of `n` cards. A single card
    /// sits in the middle of the band.
    pub fn slots(&self, n: usize) -> Vec<Point> {
        match n {
            0 => Vec::new(),
            1 => vec![Point::new((self.left + self.right) / 2.0, self.band)],
            n => {
                let step = (self.right - self.left) / (n - 1) as Pixels;
                (0..n)
                    .map(|i| Point::new(self.left + step * i as Pixels, self.band))
                    .collect()
            }
        }
    }
    /// Fraction of the residual to cover this frame. Approaches 1 for a
    /// long frame, so a stalled tab catches up without overshooting.
    pub fn alpha(&self, dt: f32) -> f32 {
        1.0 - (-self.decay * dt).exp()
    }
}
