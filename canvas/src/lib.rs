//! Interaction core for the shared whiteboard surface.
//!
//! This crate owns everything that happens between a raw pointer event and a
//! changed pixel or note: routing input by interaction mode, rasterizing
//! freehand strokes, and running the drag and resize gestures for sticky
//! notes. It performs no I/O. The host wires DOM (or windowing) events to
//! [`engine::EngineCore`] and applies the returned [`engine::Action`]s;
//! persistence lives in the `whiteboard` crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Mode controller and pointer router ([`engine::EngineCore`]) |
//! | [`draw`] | Drawing engine: pointer stream to strokes |
//! | [`raster`] | Fixed-size bitmap surface and PNG codec |
//! | [`notes`] | Sticky note model and store |
//! | [`drag`] | Note drag gesture state machine |
//! | [`resize`] | Note resize gesture state machine |
//! | [`hit`] | Hit-testing against notes and their controls |
//! | [`input`] | Mode, buttons, normalized pointer events, capture tokens |
//! | [`geom`] | Points, sizes, and viewport-to-surface conversion |
//! | [`render`] | Per-note presentation styles |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod drag;
pub mod draw;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod notes;
pub mod raster;
pub mod render;
pub mod resize;
