// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod fallback;
pub mod gateway;
pub mod mock;
pub mod models;
pub mod savings;
pub mod scan;
pub mod screens;
pub mod session;
pub mod settings;
pub mod theme;
pub mod utils;
pub mod view;
