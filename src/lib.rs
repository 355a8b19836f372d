//! Generates a programming trivia question with Gemini and posts it as a
//! Telegram quiz poll, once per HTTP trigger.
//!
//! The moving parts are two traits: a [`generator::Generator`] that turns a
//! fixed prompt into a [`question::Question`], and a [`publisher::Publisher`]
//! that submits it as a poll. The [`orchestrator::Orchestrator`] sequences
//! them with a single retry; [`server::router`] exposes the trigger endpoint.

pub mod config;
pub mod generator;
pub mod orchestrator;
pub mod publisher;
pub mod question;
pub mod server;
