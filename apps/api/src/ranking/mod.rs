// Candidate ranking engine
// Implements: anonymization, skill analysis, embedding similarity, composite
// scoring, ranking and the audit trail. Embedding goes through the `Embedder`
// trait only — no module talks to an embedding backend directly.

pub mod anonymizer;
pub mod audit;
pub mod embedder;
pub mod handlers;
pub mod pipeline;
pub mod ranker;
pub mod scoring;
pub mod similarity;
pub mod skills;

#[cfg(test)]
pub mod test_support;
