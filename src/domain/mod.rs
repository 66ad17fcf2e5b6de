//! Domain layer - ABI package models

pub mod abi;
