//! Feed generators

use cooccur::{Entry, Feed, Label, LabelId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Size parameters for a random feed
#[derive(Debug, Clone, Copy)]
pub struct FeedShape {
    pub labels: usize,
    pub entries: usize,
    /// Maximum labels attached to one entry
    pub max_labels_per_entry: usize,
    /// Chance that an entry also references an id outside the label set
    pub stray_reference_rate: f64,
}

impl Default for FeedShape {
    fn default() -> Self {
        Self {
            labels: 12,
            entries: 40,
            max_labels_per_entry: 5,
            stray_reference_rate: 0.0,
        }
    }
}

/// Build a reproducible random feed with recounted frequencies
pub fn random_feed(seed: u64, shape: FeedShape) -> Feed {
    let mut rng = StdRng::seed_from_u64(seed);

    let labels: Vec<Label> = (1..=shape.labels as u64)
        .map(|id| Label::new(id, &format!("label-{}", id), 0))
        .collect();
    let ids: Vec<LabelId> = labels.iter().map(|l| l.id).collect();

    let entries: Vec<Entry> = (1..=shape.entries as u64)
        .map(|id| {
            let count = rng.gen_range(0..=shape.max_labels_per_entry.min(ids.len()));
            let mut attached: Vec<LabelId> = ids.choose_multiple(&mut rng, count).copied().collect();
            if rng.gen_bool(shape.stray_reference_rate) {
                attached.push(LabelId::new(10_000 + id));
            }
            Entry::new(id, attached)
        })
        .collect();

    let mut feed = Feed::new(labels, entries);
    feed.recount();
    feed
}

/// flying/water/lucid, each pair sharing one entry
pub fn triangle_feed() -> Feed {
    Feed::from_yaml_str(
        "\
labels:
  - { id: 1, name: flying, frequency: 2 }
  - { id: 2, name: water, frequency: 2 }
  - { id: 3, name: lucid, frequency: 2 }
entries:
  - { id: 1, labels: [1, 2] }
  - { id: 2, labels: [1, 3] }
  - { id: 3, labels: [2, 3] }
",
    )
    .expect("triangle feed parses")
}
