pub mod assembler;
pub mod classifier;
pub mod naming;
pub mod recon_model;
pub mod selector;
pub mod type_normalizer;
