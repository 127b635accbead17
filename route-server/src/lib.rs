//! Travel route optimizer server.
//!
//! Loads a network of cities joined by routes and answers: "what is the
//! shortest, or the cheapest, way to get from here to there?"

pub mod config;
pub mod data;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod web;
