//! Financial calculation engine for self-service personal-finance calculators.
//!
//! [`core`] holds the pure calculators (compound growth, months-to-target, retirement,
//! ROI, budget health, comparison, emergency fund, debt payoff). [`api`] turns JSON
//! payloads into validated inputs and serializes the results.

pub mod api;
pub mod core;
