//! JaGedo Match Common Library
//!
//! CLIとWeb(WASM)で共有される型と検索コントローラ

pub mod types;
pub mod error;
pub mod query;
pub mod endpoints;
pub mod render;
pub mod controller;

pub use types::{CountyList, Match, Query, DEFAULT_COUNTY, JOB_TYPES};
pub use error::{Error, Result};
pub use query::{InputEvent, QueryState};
pub use endpoints::Endpoints;
pub use render::{MatchAction, MatchEntry, ResultsBody, SearchView, render_error, render_matches};
pub use controller::{CountyLoad, SearchBackend, SearchController, load_counties, run_query};
