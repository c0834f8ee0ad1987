//! Ordered threshold bands mapping a number to a category.

use crate::models::Gender;

/// Upper edge of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value < x`
    Below(f64),
    /// `value <= x`
    AtMost(f64),
}

impl Bound {
    fn admits(&self, value: f64) -> bool {
        match *self {
            Bound::Below(x) => value < x,
            Bound::AtMost(x) => value <= x,
        }
    }

    pub fn edge(&self) -> f64 {
        match *self {
            Bound::Below(x) | Bound::AtMost(x) => x,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Band<T> {
    pub bound: Bound,
    pub category: T,
}

impl<T> Band<T> {
    pub fn below(x: f64, category: T) -> Self {
        Self {
            bound: Bound::Below(x),
            category,
        }
    }

    pub fn at_most(x: f64, category: T) -> Self {
        Self {
            bound: Bound::AtMost(x),
            category,
        }
    }
}

/// Bands in ascending order followed by a catch-all category.
///
/// The first band admitting a value wins; anything no band admits (including
/// NaN) falls into `rest`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bands<T> {
    bands: Vec<Band<T>>,
    rest: T,
}

impl<T: Copy> Bands<T> {
    /// Band edges must be strictly increasing.
    pub fn new(bands: Vec<Band<T>>, rest: T) -> Self {
        debug_assert!(
            bands.windows(2).all(|w| w[0].bound.edge() < w[1].bound.edge()),
            "band edges must be strictly increasing"
        );
        Self { bands, rest }
    }

    pub fn classify(&self, value: f64) -> T {
        self.bands
            .iter()
            .find(|band| band.bound.admits(value))
            .map(|band| band.category)
            .unwrap_or(self.rest)
    }

    /// Band edges, in order.
    pub fn edges(&self) -> Vec<f64> {
        self.bands.iter().map(|b| b.bound.edge()).collect()
    }
}

/// Separate band sets for male and non-male inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderedBands<T> {
    pub male: Bands<T>,
    pub other: Bands<T>,
}

impl<T: Copy> GenderedBands<T> {
    pub fn select(&self, gender: Gender) -> &Bands<T> {
        if gender.is_male() {
            &self.male
        } else {
            &self.other
        }
    }

    pub fn classify(&self, value: f64, gender: Gender) -> T {
        self.select(gender).classify(value)
    }
}

/// Human-readable outcome of a classification.
pub trait Category: Copy {
    fn label(&self) -> &'static str;
    fn advice(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bands<&'static str> {
        Bands::new(
            vec![Band::below(10.0, "low"), Band::at_most(20.0, "mid")],
            "high",
        )
    }

    #[test]
    fn test_first_match_wins() {
        let bands = sample();
        assert_eq!(bands.classify(-5.0), "low");
        assert_eq!(bands.classify(9.99), "low");
        assert_eq!(bands.classify(10.0), "mid");
        assert_eq!(bands.classify(20.0), "mid");
        assert_eq!(bands.classify(20.01), "high");
        assert_eq!(bands.classify(1e9), "high");
    }

    #[test]
    fn test_rest_catches_nan() {
        assert_eq!(sample().classify(f64::NAN), "high");
    }

    #[test]
    fn test_edges() {
        assert_eq!(sample().edges(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_gendered_selection() {
        let bands = GenderedBands {
            male: Bands::new(vec![Band::below(5.0, "m-low")], "m-high"),
            other: Bands::new(vec![Band::below(10.0, "f-low")], "f-high"),
        };
        assert_eq!(bands.classify(7.0, Gender::Male), "m-high");
        assert_eq!(bands.classify(7.0, Gender::Female), "f-low");
    }
}
