pub mod hover;
pub mod pointer;
pub mod scroll;

pub use hover::wire_hoverables;
pub use pointer::{wire_hero, wire_pointer};
pub use scroll::wire_scroll;

use folio_core::PresentationLayer;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedLayer = Rc<RefCell<PresentationLayer>>;
