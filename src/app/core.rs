// SPDX-License-Identifier: GPL-3.0

pub mod catalog;
pub mod models;

pub use catalog::load_catalog;
