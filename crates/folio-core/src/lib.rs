//! Platform-free interaction state for the folio page.
//!
//! Nothing here touches the DOM. The web front-end turns browser events into
//! [`InputEvent`]s, feeds them to a [`PresentationLayer`] and renders the
//! resulting [`PresentationSnapshot`].

pub mod config;
pub mod constants;
pub mod cursor;
pub mod geometry;
pub mod motion;
pub mod phase;
pub mod presentation;
pub mod scroll;
pub mod spotlight;
pub mod tilt;

pub use config::*;
pub use constants::*;
pub use cursor::*;
pub use geometry::*;
pub use motion::*;
pub use phase::*;
pub use presentation::*;
pub use scroll::*;
pub use spotlight::*;
pub use tilt::*;
