//! Visage Core - Parametric Face Composer
//!
//! # The Four Rules
//! 1. Geometry Lives On Shapes, Transforms Live On Groups
//! 2. Rendering Is Pure: Config In, Markup Out
//! 3. Tokens Round-Trip Exactly
//! 4. A Corrupt Token Never Crashes The Face

pub mod shapes;
pub mod fields;
pub mod groups;
pub mod codec;

pub use shapes::{render_shape, Point, Shape, ShapeKind};
pub use fields::{shape_fields, FieldDef};
pub use groups::{default_config, render_all, render_document, render_group, Config, Group};
pub use codec::{
    decode, encode, fingerprint, load_from_store, sync_to_store, try_decode, DecodeError,
    MemoryTokenStore, TokenStore,
};

pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Side length of the square viewport the face is composed in.
/// The coordinate space is centered on the origin.
pub const FACE_SIZE: u32 = 100;
