//! Brand palette.
//!
//! The stylesheet declares the same values as custom properties; code that
//! needs a color outside CSS reads them here.

#![allow(dead_code)]

pub const SKY: &str = "#4AB1F1";
pub const MINT: &str = "#2AF598";
pub const VIOLET: &str = "#9D4EDD";
pub const WHATSAPP_GREEN: &str = "#25D366";

pub const SPACE_BLACK: &str = "#05070f";
