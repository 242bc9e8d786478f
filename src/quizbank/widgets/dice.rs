use super::{unknown_action, Widget, WidgetKind};
use crate::error::Result;
use rand::Rng;

/// Rolls a six-sided die.
pub fn d6() -> u8 {
    roll_with(&mut rand::thread_rng())
}

pub fn roll_with<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDice {
    left: u8,
    right: u8,
}

impl Default for TwoDice {
    fn default() -> Self {
        Self { left: 1, right: 1 }
    }
}

impl TwoDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dice(&self) -> (u8, u8) {
        (self.left, self.right)
    }

    pub fn is_win(&self) -> bool {
        self.left == self.right
    }

    pub fn roll(&mut self) {
        self.left = d6();
        self.right = d6();
    }

    pub fn roll_using<R: Rng>(&mut self, rng: &mut R) {
        self.left = roll_with(rng);
        self.right = roll_with(rng);
    }
}

impl Widget for TwoDice {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Dice
    }

    fn actions(&self) -> &'static [&'static str] {
        &["roll"]
    }

    fn apply(&mut self, action: &str) -> Result<()> {
        match action {
            "roll" => self.roll(),
            other => return Err(unknown_action(self.kind(), other)),
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        let verdict = if self.is_win() {
            "You Win! 🎉"
        } else {
            "Try Again!"
        };
        vec![
            format!("Die 1: 🎲 {}", self.left),
            format!("Die 2: 🎲 {}", self.right),
            verdict.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn d6_stays_in_range() {
        for _ in 0..500 {
            let roll = d6();
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn seeded_rolls_are_repeatable() {
        let mut a = TwoDice::new();
        let mut b = TwoDice::new();
        a.roll_using(&mut StdRng::seed_from_u64(7));
        b.roll_using(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn starts_as_a_win() {
        let dice = TwoDice::new();
        assert_eq!(dice.dice(), (1, 1));
        assert_eq!(dice.render(), vec!["Die 1: 🎲 1", "Die 2: 🎲 1", "You Win! 🎉"]);
    }

    #[test]
    fn verdict_follows_dice() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut dice = TwoDice::new();
            dice.roll_using(&mut rng);
            let (left, right) = dice.dice();
            assert!((1..=6).contains(&left) && (1..=6).contains(&right));
            let expected = if left == right { "You Win! 🎉" } else { "Try Again!" };
            assert_eq!(dice.render()[2], expected);
        }
    }
}
