//! Rubber-band multi-select interaction engine.
//!
//! Turns pointer input into a live selection rectangle, auto-scrolls the page
//! while the pointer sits near the top or bottom edge, and keeps the selected
//! flag of every item in sync with the rectangle.
//!
//! The engine is toolkit-agnostic: a host implements the traits in [`host`]
//! and feeds events and animation frames to a [`SelectionEngine`].
//!
//! ```ignore
//! let mut engine = SelectionEngine::new(EngineSettings::load());
//! engine.init_drag_selection(&mut host, container);
//! engine.handle_event(&mut host, &event);
//! engine.on_frame(&mut host, frame);
//! engine.destroy_drag_selection(&mut host);
//! ```

pub mod auto_scroll;
pub mod bounds;
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod input;
pub mod overlay;
pub mod page;
pub mod perf;
pub mod reconcile;
pub mod replay;
pub mod scheduler;
pub mod selection;
pub mod settings;
pub mod spatial_index;

pub use engine::{DragSelection, SelectionEngine};
pub use error::{SettingsError, SettingsResult};
pub use events::{EventKind, InputEvent, KeyEvent, Modifiers, PointerEvent};
pub use geometry::{Point, Rect, Size, intersects};
pub use host::{ContainerId, HitTarget, Host, ItemBounds, ItemId};
pub use settings::{AdditivePolicy, AutoScrollSettings, EngineSettings};
