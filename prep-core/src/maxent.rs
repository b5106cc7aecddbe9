//! # Maximum Entropy (multinomial logistic regression)
//!
//! Discriminative log-linear classifier used to type entity spans that no
//! gazetteer or head-word rule recognizes.
//!
//! $$ P(y|x) = \frac{\exp(\sum_i w_{i,y} \cdot f_i(x))}{Z(x)} $$
//!
//! Trained with stochastic gradient descent and L2 regularization; features may
//! overlap freely ("last word is *University*" and "span has *of*").

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::features::FeatureVector;

#[derive(Debug, Clone)]
pub struct MaxEntModel<C> {
    /// feature -> class -> weight.
    weights: HashMap<String, HashMap<C, f64>>,
    /// Known classes, sorted.
    classes: Vec<C>,
}

impl<C: Clone + Eq + Hash + Ord> Default for MaxEntModel<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone + Eq + Hash + Ord> MaxEntModel<C> {
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
            classes: Vec::new(),
        }
    }

    pub fn classes(&self) -> &[C] {
        &self.classes
    }

    /// Fits the weights with SGD and returns the training accuracy of the last epoch.
    ///
    /// * `learning_rate` - step size $\eta$.
    /// * `lambda` - L2 penalty; shrinks every touched weight a little on each step.
    pub fn train(&mut self, examples: &[(FeatureVector, C)], iterations: usize, learning_rate: f64, lambda: f64) -> f64 {
        let mut classes: Vec<C> = examples.iter().map(|(_, c)| c.clone()).collect();
        classes.sort();
        classes.dedup();
        self.classes = classes;

        let mut accuracy = 0.0;
        for epoch in 0..iterations {
            let mut correct = 0usize;

            for (fv, truth) in examples {
                let probs = self.probabilities(fv);
                if best(&probs).map(|(c, _)| c == truth).unwrap_or(false) {
                    correct += 1;
                }

                for (class, prob) in &probs {
                    // gradient of the log-likelihood for this class
                    let indicator = if class == truth { 1.0 } else { 0.0 };
                    let error = indicator - prob;
                    if error.abs() <= 1e-6 {
                        continue;
                    }
                    for (feature, value) in &fv.features {
                        let per_class = self.weights.entry(feature.clone()).or_default();
                        let current = per_class.get(class).copied().unwrap_or(0.0);
                        let updated = current + learning_rate * (error * value - lambda * current);
                        if updated.abs() > 1e-9 {
                            per_class.insert(class.clone(), updated);
                        } else {
                            per_class.remove(class);
                        }
                    }
                }
            }

            accuracy = correct as f64 / examples.len().max(1) as f64;
            debug!(epoch, correct, total = examples.len(), accuracy, "maxent epoch");
        }
        accuracy
    }

    /// `P(class | fv)` for every known class, in class order.
    pub fn probabilities(&self, fv: &FeatureVector) -> Vec<(C, f64)> {
        let scores: Vec<f64> = self
            .classes
            .iter()
            .map(|class| {
                fv.features
                    .iter()
                    .filter_map(|(feature, value)| {
                        self.weights.get(feature)?.get(class).map(|w| w * value)
                    })
                    .sum()
            })
            .collect();

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let z: f64 = exps.iter().sum();
        self.classes
            .iter()
            .cloned()
            .zip(exps.into_iter().map(|e| e / z))
            .collect()
    }

    /// Most probable class and its probability.
    pub fn predict(&self, fv: &FeatureVector) -> Option<(C, f64)> {
        best(&self.probabilities(fv)).map(|(c, p)| (c.clone(), p))
    }
}

/// First class with the highest probability.
fn best<C>(probs: &[(C, f64)]) -> Option<(&C, f64)> {
    let mut best: Option<(&C, f64)> = None;
    for (class, p) in probs {
        if best.map(|(_, bp)| *p > bp).unwrap_or(true) {
            best = Some((class, *p));
        }
    }
    best
}
