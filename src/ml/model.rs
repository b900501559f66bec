use burn::{
    nn::{loss::BinaryCrossEntropyLossConfig, Linear, LinearConfig},
    prelude::*,
    tensor::activation::{relu, sigmoid},
};

/// Number of hidden units in the dense layer
pub const DEFAULT_HIDDEN_UNITS: usize = 16;

// Persisted as JSON next to the weights so a load can rebuild the layers.
#[derive(Config, Debug)]
pub struct BowClassifierConfig {
    /// Length of every encoded input sequence
    pub input_len: usize,
    #[config(default = 16)]
    pub hidden_units: usize,
}

impl BowClassifierConfig {
    /// Both layers need at least one unit; burn cannot initialise
    /// a zero-width Linear.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.input_len > 0, "input length must be at least 1");
        anyhow::ensure!(self.hidden_units > 0, "hidden units must be at least 1");
        Ok(())
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> BowClassifier<B> {
        let hidden = LinearConfig::new(self.input_len, self.hidden_units).init(device);
        let output = LinearConfig::new(self.hidden_units, 1).init(device);
        BowClassifier { hidden, output }
    }
}

#[derive(Module, Debug)]
pub struct BowClassifier<B: Backend> {
    pub hidden: Linear<B>,
    pub output: Linear<B>,
}

impl<B: Backend> BowClassifier<B> {
    /// inputs: [batch, input_len] → logits: [batch, 1]
    pub fn forward(&self, inputs: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.hidden.forward(inputs));
        self.output.forward(x)
    }

    /// Probability that each row is AI-generated: [batch, 1]
    pub fn forward_probabilities(&self, inputs: Tensor<B, 2>) -> Tensor<B, 2> {
        sigmoid(self.forward(inputs))
    }

    /// Binary cross-entropy on logits against 0/1 targets of shape [batch, 1].
    pub fn forward_loss(
        &self,
        inputs:  Tensor<B, 2>,
        targets: Tensor<B, 2, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let logits = self.forward(inputs);
        let bce = BinaryCrossEntropyLossConfig::new()
            .with_logits(true)
            .init(&logits.device());
        let loss = bce.forward(logits.clone(), targets);
        (loss, logits)
    }
}

/// How many rows the logits classify correctly; logit >= 0 means AI.
pub fn count_correct<B: Backend>(logits: Tensor<B, 2>, targets: Tensor<B, 2, Int>) -> usize {
    let correct: i64 = logits
        .greater_equal_elem(0.0)
        .int()
        .equal(targets)
        .int()
        .sum()
        .into_scalar()
        .elem::<i64>();
    correct as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::InnerBackend;
    use burn::tensor::TensorData;

    #[test]
    fn test_forward_shapes() {
        let device = Default::default();
        let model: BowClassifier<InnerBackend> = BowClassifierConfig::new(40).init(&device);
        let inputs = Tensor::<InnerBackend, 2>::zeros([3, 40], &device);
        assert_eq!(model.forward(inputs.clone()).dims(), [3, 1]);

        let probs = model
            .forward_probabilities(inputs)
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_zero_width_layers_are_rejected() {
        assert!(BowClassifierConfig::new(0).validate().is_err());
        assert!(BowClassifierConfig::new(40).with_hidden_units(0).validate().is_err());
        assert!(BowClassifierConfig::new(40).validate().is_ok());
    }

    #[test]
    fn test_default_hidden_units() {
        let cfg = BowClassifierConfig::new(40);
        assert_eq!(cfg.hidden_units, DEFAULT_HIDDEN_UNITS);
    }

    #[test]
    fn test_count_correct_thresholds_at_zero_logit() {
        let device = Default::default();
        let logits = Tensor::<InnerBackend, 2>::from_data(
            TensorData::new(vec![2.0f32, -1.0, 0.0, -3.0], [4, 1]),
            &device,
        );
        let targets = Tensor::<InnerBackend, 2, Int>::from_data(
            TensorData::new(vec![1i64, 0, 0, 1], [4, 1]),
            &device,
        );
        // rows 0 and 1 right; row 2 predicts AI on a tie; row 3 wrong
        assert_eq!(count_correct(logits, targets), 2);
    }
}
