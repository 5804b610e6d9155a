// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles, grouped by widget family.

pub mod button;
pub mod container;
pub mod overlay;
pub mod text_input;
