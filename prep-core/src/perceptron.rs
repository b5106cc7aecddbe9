//! # Averaged Perceptron
//!
//! Online, mistake-driven linear classifier. Training sees one item at a time
//! and only changes weights when the prediction is wrong.
//!
//! The plain perceptron oscillates; the final model instead uses the **average**
//! of every intermediate weight vector, which is far more stable.
//!
//! ## Lazy averaging
//!
//! Summing all weights after every step costs $O(N \cdot T)$. Instead, each
//! weight remembers the step of its last change, and its running total is
//! brought up to date only when it changes again (or at the end). The resulting
//! model is identical to the eager average.

use std::collections::HashMap;
use std::hash::Hash;

use crate::features::FeatureVector;

#[derive(Debug, Clone)]
pub struct AveragedPerceptron<C> {
    /// feature -> class -> current weight.
    weights: HashMap<String, HashMap<C, f64>>,
    /// Accumulated weight per (feature, class) up to `stamps`.
    totals: HashMap<(String, C), f64>,
    /// Step of the last change per (feature, class).
    stamps: HashMap<(String, C), usize>,
    /// Training items seen.
    steps: usize,
    /// Known classes, sorted; ties in prediction go to the first.
    classes: Vec<C>,
}

impl<C: Clone + Eq + Hash + Ord> AveragedPerceptron<C> {
    pub fn new(classes: impl IntoIterator<Item = C>) -> Self {
        let mut classes: Vec<C> = classes.into_iter().collect();
        classes.sort();
        classes.dedup();
        Self {
            weights: HashMap::new(),
            totals: HashMap::new(),
            stamps: HashMap::new(),
            steps: 0,
            classes,
        }
    }

    pub fn classes(&self) -> &[C] {
        &self.classes
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Score of every known class, in class order.
    pub fn scores(&self, fv: &FeatureVector) -> Vec<(C, f64)> {
        let mut scores: HashMap<&C, f64> = HashMap::new();
        for (feature, value) in &fv.features {
            let Some(per_class) = self.weights.get(feature) else { continue };
            for (class, weight) in per_class {
                *scores.entry(class).or_insert(0.0) += value * weight;
            }
        }
        self.classes
            .iter()
            .map(|c| (c.clone(), scores.get(c).copied().unwrap_or(0.0)))
            .collect()
    }

    /// Highest-scoring class, or `None` before any class is known.
    pub fn predict(&self, fv: &FeatureVector) -> Option<C> {
        let mut best: Option<(C, f64)> = None;
        for (class, score) in self.scores(fv) {
            if best.as_ref().map(|(_, s)| score > *s).unwrap_or(true) {
                best = Some((class, score));
            }
        }
        best.map(|(class, _)| class)
    }

    /// One training step: promotes `truth` and demotes `guess` on every active feature.
    ///
    /// Counts as a step even when the guess was right.
    pub fn update(&mut self, truth: &C, guess: &C, fv: &FeatureVector) {
        self.steps += 1;
        if truth == guess {
            return;
        }
        for feature in fv.features.keys() {
            self.update_feature(feature, truth, 1.0);
            self.update_feature(feature, guess, -1.0);
        }
    }

    fn update_feature(&mut self, feature: &str, class: &C, delta: f64) {
        let key = (feature.to_string(), class.clone());
        let per_class = self.weights.entry(feature.to_string()).or_default();
        let current = per_class.get(class).copied().unwrap_or(0.0);
        let last = self.stamps.get(&key).copied().unwrap_or(0);

        // the old weight held from `last` until now
        *self.totals.entry(key.clone()).or_insert(0.0) += (self.steps - last) as f64 * current;
        self.stamps.insert(key, self.steps);
        per_class.insert(class.clone(), current + delta);
    }

    /// Replaces every weight by its average over all steps. Call once, after training.
    pub fn average_weights(&mut self) {
        let steps = self.steps.max(1) as f64;
        for (feature, per_class) in self.weights.iter_mut() {
            for (class, weight) in per_class.iter_mut() {
                let key = (feature.clone(), class.clone());
                let last = self.stamps.get(&key).copied().unwrap_or(0);
                let total = self.totals.get(&key).copied().unwrap_or(0.0)
                    + (self.steps - last) as f64 * *weight;
                *weight = total / steps;
            }
            per_class.retain(|_, w| *w != 0.0);
        }
        self.weights.retain(|_, per_class| !per_class.is_empty());
        self.totals.clear();
        self.stamps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fv(features: &[&str]) -> FeatureVector {
        let mut fv = FeatureVector::new();
        fv.insert("bias", 1.0);
        for f in features {
            fv.insert(*f, 1.0);
        }
        fv
    }

    #[test]
    fn test_learns_separable_classes() {
        let data = [(fv(&["suffix=ing"]), "VBG"), (fv(&["suffix=ly"]), "RB"), (fv(&["suffix=ion"]), "NN")];
        let mut model = AveragedPerceptron::new(data.iter().map(|(_, c)| c.to_string()));
        for _ in 0..5 {
            for (x, truth) in &data {
                let guess = model.predict(x).unwrap();
                model.update(&truth.to_string(), &guess, x);
            }
        }
        model.average_weights();

        for (x, truth) in &data {
            assert_eq!(model.predict(x).as_deref(), Some(*truth));
        }
    }

    #[test]
    fn test_empty_model() {
        let model: AveragedPerceptron<String> = AveragedPerceptron::new(Vec::new());
        assert_eq!(model.predict(&fv(&[])), None);
    }

    #[test]
    fn test_ties_go_to_first_class() {
        let model = AveragedPerceptron::new(["b", "a"]);
        assert_eq!(model.classes(), ["a", "b"]);
        assert_eq!(model.predict(&fv(&["unseen"])), Some("a"));
    }

    #[test]
    fn test_averaging_matches_eager_sum() {
        let x = fv(&[]);
        let mut model = AveragedPerceptron::new(["a", "b"]);
        // step 1: wrong -> bias/a = 1, bias/b = -1
        model.update(&"a", &"b", &x);
        // steps 2..4: right, weights unchanged
        for _ in 0..3 {
            model.update(&"a", &"a", &x);
        }
        model.average_weights();
        // after step 1 the weight is 1 for steps 2,3,4 -> average (0 + 3) / 4
        let scores = model.scores(&x);
        assert_eq!(scores, vec![("a", 0.75), ("b", -0.75)]);
    }
}
