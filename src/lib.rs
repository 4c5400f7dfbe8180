// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod export;
pub mod models;
pub mod seed;
pub mod session;
pub mod utils;
pub mod views;
