use burn::data::dataset::Dataset;

use crate::domain::sequence::EncodedSample;

/// Encoded, labelled samples exposed through burn's Dataset trait.
pub struct ClassifierDataset {
    samples: Vec<EncodedSample>,
}

impl ClassifierDataset {
    pub fn new(samples: Vec<EncodedSample>) -> Self { Self { samples } }

    /// Clone the samples at `indices`, skipping any out of range
    pub fn gather(&self, indices: &[usize]) -> Vec<EncodedSample> {
        indices.iter().filter_map(|&i| self.get(i)).collect()
    }
}

impl Dataset<EncodedSample> for ClassifierDataset {
    fn get(&self, index: usize) -> Option<EncodedSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Label;
    use crate::domain::sequence::EncodedSequence;

    #[test]
    fn test_gather_preserves_index_order() {
        let ds = ClassifierDataset::new(
            (0..4)
                .map(|i| EncodedSample::new(EncodedSequence::new(vec![i]), Label::Human))
                .collect(),
        );
        let picked = ds.gather(&[3, 0, 9]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].sequence.ids(), [3]);
        assert_eq!(picked[1].sequence.ids(), [0]);
        assert_eq!(ds.len(), 4);
    }
}
