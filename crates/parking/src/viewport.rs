//! World-to-pixel mapping for the configured screen.

use glam::DVec2;

use crate::config::ParkingConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    /// Pixels per meter
    scaling: f64,
    /// Fraction of the screen where the focus point is drawn
    centering: [f64; 2],
    /// World position of the top-left pixel
    origin: DVec2,
}

impl Viewport {
    #[must_use]
    pub fn from_config(config: &ParkingConfig) -> Self {
        Self {
            width: config.screen_width,
            height: config.screen_height,
            scaling: config.scaling,
            centering: config.centering_position,
            origin: DVec2::ZERO,
        }
    }

    /// Move the view so that `focus` is drawn at the centering position.
    #[must_use]
    pub fn centered_on(mut self, focus: DVec2) -> Self {
        let offset = DVec2::new(
            self.centering[0] * f64::from(self.width),
            self.centering[1] * f64::from(self.height),
        );
        self.origin = focus - offset / self.scaling;
        self
    }

    /// Pixel coordinates of a world position. May fall outside the screen.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixels(&self, position: DVec2) -> (i32, i32) {
        let p = (position - self.origin) * self.scaling;
        (p.x.round() as i32, p.y.round() as i32)
    }

    #[must_use]
    pub fn is_visible(&self, position: DVec2) -> bool {
        let (x, y) = self.to_pixels(position);
        (0..i64::from(self.width)).contains(&i64::from(x))
            && (0..i64::from(self.height)).contains(&i64::from(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_lands_on_screen_center() {
        let view = Viewport::from_config(&ParkingConfig::default()).centered_on(DVec2::new(10.0, -3.0));
        assert_eq!(view.to_pixels(DVec2::new(10.0, -3.0)), (300, 150));
        assert_eq!(view.to_pixels(DVec2::new(11.0, -3.0)), (307, 150));
        assert!(view.is_visible(DVec2::new(10.0, -3.0)));
        assert!(!view.is_visible(DVec2::new(60.0, -3.0)));
    }
}
