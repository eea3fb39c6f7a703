use serde::{Deserialize, Serialize};

/// One sampled candidate location and its relative likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPoint {
    pub lat: f64,
    pub lon: f64,
    /// Relative likelihood in `[0, 1]`; the most likely point of a field is 1.0.
    pub probability: f64,
}

impl ProbabilityPoint {
    pub fn new(lat: f64, lon: f64, probability: f64) -> Self {
        Self {
            lat,
            lon,
            probability,
        }
    }
}

/// Ordered set of probability points in generation order.
///
/// Order carries no meaning but is preserved so exports and top-N
/// selections are reproducible for a given seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityField {
    points: Vec<ProbabilityPoint>,
}

impl ProbabilityField {
    pub fn new(points: Vec<ProbabilityPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbabilityPoint> {
        self.points.iter()
    }

    pub fn max_probability(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.probability)
            .fold(None, |acc, p| Some(acc.map_or(p, |m: f64| m.max(p))))
    }

    /// Points whose probability is strictly greater than `threshold`.
    pub fn above(&self, threshold: f64) -> impl Iterator<Item = &ProbabilityPoint> {
        self.points.iter().filter(move |p| p.probability > threshold)
    }

    /// The `n` most likely points, most likely first. Ties keep generation order.
    pub fn top(&self, n: usize) -> Vec<ProbabilityPoint> {
        let mut ranked = self.points.clone();
        ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        ranked.truncate(n);
        ranked
    }
}

impl<'a> IntoIterator for &'a ProbabilityField {
    type Item = &'a ProbabilityPoint;
    type IntoIter = std::slice::Iter<'a, ProbabilityPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
