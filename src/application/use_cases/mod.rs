pub mod reward;
