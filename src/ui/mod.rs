// SPDX-License-Identifier: MPL-2.0
//! Iced rendering layer.
//!
//! Everything toolkit-specific lives here; the engine modules never
//! import Iced types. Hosts that render alerts themselves (or use a
//! different toolkit) can ignore this module entirely and drive the
//! [`PresentationController`](crate::controller::PresentationController)
//! through its observer interface.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - Toast widget rendering the current alert

pub mod design_tokens;
pub mod toast;

pub use toast::Toast;
