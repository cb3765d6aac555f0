//! Reads an oscilloscope frequency sweep from a CSV file, converts each
//! point's voltage ratio to gain in decibels, and renders a Bode magnitude
//! chart as a PNG.

pub mod chart;
pub mod data;
pub mod error;
pub mod gain;
