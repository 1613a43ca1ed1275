//! Map annotation engine: pan/zoom viewport, ruler calibration, path distance,
//! and a hex grid overlay.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! viewport transform, the annotation models, and the render pass. The host
//! layer is responsible only for capturing DOM input, loading the background
//! image, and calling into [`engine::Engine`] once per interaction and frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Viewport state and screen/world coordinate conversions |
//! | [`calibration`] | Two-click ruler that derives the pixel-to-unit ratio |
//! | [`path`] | Multi-point path and its real-world length |
//! | [`hex`] | Hex grid tessellation and viewport culling |
//! | [`render`] | Pure frame builder producing draw commands |
//! | [`canvas2d`] | Replays a frame onto a `CanvasRenderingContext2d` |
//! | [`input`] | Interaction modes, modifiers, and routed events |
//! | [`geometry`] | Points, rectangles, distances, hexagon vertices |
//! | [`config`] | Tunable parameters loaded from JSON |
//! | [`consts`] | Shared numeric constants and colors |

pub mod calibration;
pub mod camera;
pub mod canvas2d;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hex;
pub mod input;
pub mod path;
pub mod render;
