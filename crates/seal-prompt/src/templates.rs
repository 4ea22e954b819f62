//! Fixed prompt texts

/// System message for self-edit generation.
pub const SYSTEM_MESSAGE: &str = "You are an expert at solving Abstraction and Reasoning Corpus (ARC) \
puzzles. Each puzzle shows a few input/output grid pairs that share one hidden transformation. \
Grids are written row by row, with cells given as colour indices 0-9 separated by spaces.";

/// Placed between the formatted training pairs and the instructions.
pub const EXAMPLES_SEPARATOR: &str = "------\n\n";

/// Asks the model to choose augmentations and training hyperparameters.
///
/// Option names match the keys of `SelfEditConfig` in `seal-core`.
pub const SELF_EDIT_INSTRUCTIONS: &str = r#"You will adapt yourself to the puzzle above by fine-tuning on the examples. Before training, decide how to build the training data and how to train.

Data generation options (true or false):
- use_basic_augmentations: rotations, flips and transpositions of every grid
- use_size_augmentations: upscaled and tiled copies of every grid
- use_chain_augmentations: compositions of two basic augmentations
- use_repeat_augmentations: duplicate each augmented example several times

Training options:
- strategy: "train_using_output_tokens" (loss on the output grid only) or "train_using_all_tokens" (loss on the whole example)
- learning_rate: a positive number, for example 0.0001
- num_train_epochs: a positive integer

Reply with a single JSON object and nothing else, in this exact shape:
{
  "data_generation": {
    "use_basic_augmentations": true,
    "use_size_augmentations": false,
    "use_chain_augmentations": false,
    "use_repeat_augmentations": true
  },
  "training": {
    "strategy": "train_using_output_tokens",
    "learning_rate": 0.0001,
    "num_train_epochs": 3
  }
}"#;
