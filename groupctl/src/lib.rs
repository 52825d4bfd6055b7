/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Collaborators of the `algebra` crate that sit outside its core:
//! standard group families, Cayley table rendering, JSON summaries and
//! the configuration of the `groupctl` binary.

pub mod config;
pub mod families;
pub mod summary;
pub mod table;
