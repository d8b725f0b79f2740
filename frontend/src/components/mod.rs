//! UI Components for the article review application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Title bar with backend status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF selection with drag & drop, analyze and cancel
//! - [`ResultsSection`] - Prompt, busy indicator, error banner or article list
//! - [`ArticleCard`] - One extracted article, expandable to [`ArticleDetail`]
//! - [`LogsPanel`] - Session activity log
//! - [`BusyIndicator`] - Extraction in progress

mod header;
mod hero;
mod upload;
mod results;
mod article_card;
mod progress;
mod footer;
mod logs;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use results::*;
pub use article_card::*;
pub use progress::*;
pub use footer::*;
pub use logs::*;
