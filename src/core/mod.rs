/// Core generation machinery: tokenizing, model building, sampling,
/// generation, rendering, and the pipeline that wires them together.

pub mod corpus;
pub mod generator;
pub mod ngram;
pub mod pipeline;
pub mod render;
pub mod sampler;
pub mod tokenizer;
