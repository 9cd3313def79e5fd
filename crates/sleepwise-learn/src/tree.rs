//! CART decision tree with Gini impurity

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeParams {
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    /// Features drawn per split; more are inspected only if none of them
    /// separates the node
    pub max_features: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        distribution: Vec<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

/// Nodes live in an arena; index 0 is the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

struct Grower<'a> {
    x: &'a [Vec<f64>],
    y: &'a [usize],
    n_classes: usize,
    params: TreeParams,
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Grow a tree over `sample`, a list of row indices that may repeat
    /// (bootstrap draws).
    pub fn fit<R: Rng>(
        x: &[Vec<f64>],
        y: &[usize],
        sample: Vec<usize>,
        n_classes: usize,
        params: TreeParams,
        rng: &mut R,
    ) -> Self {
        let mut grower = Grower {
            x,
            y,
            n_classes,
            params,
            nodes: Vec::new(),
        };
        grower.grow(sample, 0, rng);
        Self {
            nodes: grower.nodes,
        }
    }

    /// Class distribution of the leaf `row` falls into
    pub fn predict_proba(&self, row: &[f64]) -> &[f64] {
        let mut id = 0;
        loop {
            match &self.nodes[id] {
                Node::Leaf { distribution } => return distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], id: usize) -> usize {
            match &nodes[id] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, *left).max(walk(nodes, *right)),
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, 0)
        }
    }
}

impl Grower<'_> {
    fn grow<R: Rng>(&mut self, indices: Vec<usize>, depth: usize, rng: &mut R) -> usize {
        let counts = self.class_counts(&indices);
        let id = self.nodes.len();

        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let too_deep = self.params.max_depth.is_some_and(|max| depth >= max);
        let too_small = indices.len() < self.params.min_samples_split;
        if pure || too_deep || too_small {
            self.nodes.push(leaf(&counts));
            return id;
        }

        let Some(split) = self.best_split(&indices, rng) else {
            self.nodes.push(leaf(&counts));
            return id;
        };

        // Reserve the slot; children are appended after it.
        self.nodes.push(leaf(&counts));
        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| self.x[i][split.feature] <= split.threshold);
        let left = self.grow(left_rows, depth + 1, rng);
        let right = self.grow(right_rows, depth + 1, rng);
        self.nodes[id] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        id
    }

    fn class_counts(&self, indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &i in indices {
            counts[self.y[i]] += 1;
        }
        counts
    }

    fn best_split<R: Rng>(&self, indices: &[usize], rng: &mut R) -> Option<Candidate> {
        let n_features = self.x.first().map_or(0, Vec::len);
        let mut features: Vec<usize> = (0..n_features).collect();
        features.shuffle(rng);

        let mut best: Option<Candidate> = None;
        for (visited, &feature) in features.iter().enumerate() {
            if visited >= self.params.max_features && best.is_some() {
                break;
            }
            if let Some(candidate) = self.best_threshold(indices, feature) {
                if best.map_or(true, |b| candidate.impurity < b.impurity) {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    /// Lowest weighted Gini over every cut between distinct values
    fn best_threshold(&self, indices: &[usize], feature: usize) -> Option<Candidate> {
        let mut sorted = indices.to_vec();
        sorted.sort_by(|&a, &b| self.x[a][feature].total_cmp(&self.x[b][feature]));

        let total = sorted.len();
        let mut right = self.class_counts(&sorted);
        let mut left = vec![0; self.n_classes];
        let mut best: Option<Candidate> = None;

        for k in 0..total - 1 {
            let label = self.y[sorted[k]];
            left[label] += 1;
            right[label] -= 1;

            let here = self.x[sorted[k]][feature];
            let next = self.x[sorted[k + 1]][feature];
            if here >= next {
                continue;
            }

            let n_left = k + 1;
            let n_right = total - n_left;
            let impurity = (n_left as f64 * gini(&left, n_left)
                + n_right as f64 * gini(&right, n_right))
                / total as f64;
            if best.map_or(true, |b| impurity < b.impurity) {
                let mut threshold = here + (next - here) / 2.0;
                if threshold >= next {
                    threshold = here;
                }
                best = Some(Candidate {
                    feature,
                    threshold,
                    impurity,
                });
            }
        }
        best
    }
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn leaf(counts: &[usize]) -> Node {
    let total: usize = counts.iter().sum();
    let distribution = counts
        .iter()
        .map(|&c| if total == 0 { 0.0 } else { c as f64 / total as f64 })
        .collect();
    Node::Leaf { distribution }
}
