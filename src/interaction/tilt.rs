use crate::interaction::{Point, Size};

/// Maximum rotation in degrees at the card edges.
pub const MAX_TILT_DEG: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Card that leans towards the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltCard {
    tilt: Tilt,
}

impl TiltCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    /// `pointer` is relative to the card's top-left corner.
    pub fn pointer_moved(&mut self, pointer: Point, card: Size) -> Tilt {
        if card.width <= 0.0 || card.height <= 0.0 {
            return self.tilt;
        }
        let x_pct = (pointer.x / card.width - 0.5).clamp(-0.5, 0.5);
        let y_pct = (pointer.y / card.height - 0.5).clamp(-0.5, 0.5);

        self.tilt = Tilt {
            rotate_x: -2.0 * MAX_TILT_DEG * y_pct,
            rotate_y: 2.0 * MAX_TILT_DEG * x_pct,
        };
        self.tilt
    }

    pub fn pointer_left(&mut self) -> Tilt {
        self.tilt = Tilt::default();
        self.tilt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Size = Size::new(600.0, 400.0);

    #[test]
    fn corners_reach_full_tilt() {
        let mut card = TiltCard::new();

        let top_left = card.pointer_moved(Point::new(0.0, 0.0), CARD);
        assert_eq!(top_left, Tilt { rotate_x: 15.0, rotate_y: -15.0 });

        let bottom_right = card.pointer_moved(Point::new(600.0, 400.0), CARD);
        assert_eq!(bottom_right, Tilt { rotate_x: -15.0, rotate_y: 15.0 });
    }

    #[test]
    fn centre_is_flat_and_leave_resets() {
        let mut card = TiltCard::new();

        assert_eq!(card.pointer_moved(Point::new(300.0, 200.0), CARD), Tilt::default());

        card.pointer_moved(Point::new(450.0, 100.0), CARD);
        assert_eq!(card.tilt(), Tilt { rotate_x: 7.5, rotate_y: 7.5 });

        card.pointer_left();
        assert_eq!(card.tilt(), Tilt::default());
    }

    #[test]
    fn pointer_outside_the_card_is_clamped() {
        let mut card = TiltCard::new();
        let tilt = card.pointer_moved(Point::new(-300.0, 1000.0), CARD);

        assert_eq!(tilt, Tilt { rotate_x: -15.0, rotate_y: -15.0 });
    }
}
