//! Thermal systems models.
//!
//! This module contains models of heat loss from piping and related
//! components.

pub mod insulated_pipe;
