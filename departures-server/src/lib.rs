//! Nearby-departures aggregation server.
//!
//! A stateless web service that answers: "what departs near me next?"
//! It chains geocoding, nearest-station lookup, and transit-authority
//! departure boards across two upstream ecosystems (one JSON, one XML)
//! and normalizes their answers into a single stable shape.

pub mod config;
pub mod domain;
pub mod geocode;
pub mod pipeline;
pub mod resrobot;
pub mod trafikverket;
pub mod web;

#[cfg(test)]
mod testutil;
