//! Cotejar - Statistical comparison of test-generation experiment results
//!
//! This library compares coverage and execution time between two
//! test-generation tool configurations using non-parametric statistics
//! (Vargha-Delaney A12 effect size, two-sided Mann-Whitney U test), and
//! drives the external test-generation tool across a batch of subject
//! classes.

pub mod cli;
pub mod coverage;
pub mod report;
pub mod runner;
pub mod samples;
pub mod stats;
pub mod subjects;
pub mod timing;
