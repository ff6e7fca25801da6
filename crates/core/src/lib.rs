//! Core library for sitenav
//!
//! This crate implements the **Functional Core** of the sitenav application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! sitenav drives the navigation, search and small interactive widgets of a
//! single-document knowledge site. It is split in two crates:
//!
//! - **`sitenav_core`** (this crate): page model, UI state and every state transition,
//!   with zero I/O
//! - **`sitenav`**: file loading, configuration discovery, terminal output and timing
//!   (the Imperative Shell)
//!
//! ## State transitions
//!
//! Every operation takes a read-only [`state::Context`] (the parsed page and the site
//! configuration) and the mutable [`state::UiState`], and returns a [`state::Outcome`]:
//!
//! - **Effects**: what a render surface must do to reflect the new state
//! - **Diagnostics**: development-only reports about missing elements or unknown ids
//!
//! Nothing here sleeps or reads a clock. Deferred work (label reverts, fill restores,
//! debounced calls) is returned as [`state::Effect::Schedule`] and comes back later as a
//! [`dispatch::Event::Timer`]. The [`timeline::Timeline`] orders those timers on a virtual
//! clock, so whole interaction scripts replay deterministically.
//!
//! ## Missing elements
//!
//! A page without a given element simply does not get the behavior that needs it. The
//! [`dispatch::DispatchTable`] only registers handlers whose elements exist, and every
//! operation degrades to an empty outcome (plus a diagnostic) instead of failing.
//!
//! # Module Organization
//!
//! - [`page`]: Parse the HTML document into the structural [`page::Page`] model
//! - [`config`]: Site configuration (section labels, thresholds, delays)
//! - [`state`]: UI state, effects, timers and diagnostics
//! - [`router`]: Section activation, breadcrumb and progress indicator
//! - [`overlay`]: Mobile navigation overlay and its close triggers
//! - [`search`]: Content search index, excerpts and highlighting
//! - [`table`], [`clipboard`], [`animation`], [`blog`], [`scroll`]: Page widgets
//! - [`debounce`], [`timeline`]: Virtual clock helpers
//! - [`dispatch`], [`controller`]: Event wiring and the shell-facing entry points
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use sitenav_core::config::SiteConfig;
//! use sitenav_core::controller::Controller;
//! use sitenav_core::page::parse_page;
//!
//! let page = parse_page(&std::fs::read_to_string("guide.html")?);
//! let mut controller = Controller::new(page, SiteConfig::default());
//!
//! controller.boot();
//! let effects = controller.navigate_to_section("networking");
//!
//! assert!(controller.state().is_section_active("networking"));
//! ```

pub mod animation;
pub mod blog;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod dispatch;
pub mod error;
pub mod overlay;
pub mod page;
pub mod router;
pub mod scroll;
pub mod search;
pub mod state;
pub mod table;
pub mod timeline;

#[cfg(test)]
mod fixtures;
