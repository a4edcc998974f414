//! Kolibra Core - Shared domain library.
//!
//! This crate provides the domain logic used across the Kolibra Solutions
//! components:
//! - `site` - Public marketing site and quote funnel
//! - `cli` - Command-line content scaffolding tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no storage. Every funnel on the site (quote cart, package
//! builder, diagnostic wizard, contact form) validates its input here and
//! renders its outbound WhatsApp message here.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, phone numbers, and prices
//! - [`cart`] - The quote cart model and its mutation outcomes
//! - [`message`] - WhatsApp text message builder
//! - [`whatsapp`] - `wa.me` deep-link construction
//! - [`quote`] - Cart quote request validation and formatting
//! - [`builder`] - Package builder selection, pricing, and formatting
//! - [`diagnostic`] - Diagnostic wizard steps, validation, and formatting
//! - [`contact`] - Contact form validation and formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod builder;
pub mod cart;
pub mod contact;
pub mod diagnostic;
pub mod message;
pub mod quote;
pub mod types;
pub mod whatsapp;

pub use types::*;
