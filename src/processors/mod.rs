//! Image processing stages for the classification pipeline.
//!
//! The stages mirror the model's companion preprocessing configuration:
//! resize (shortest edge or exact), center crop, and rescale/normalize into
//! an NCHW tensor. [`Topk`] post-processes the raw score matrix into ranked
//! class predictions.

pub mod crop;
pub mod normalization;
pub mod resize;
pub mod topk;
pub mod types;

pub use crop::center_crop;
pub use normalization::NormalizeImage;
pub use resize::{resize_exact, resize_shortest_edge, shortest_edge_dims};
pub use topk::{Topk, TopkResult};
pub use types::ChannelOrder;
