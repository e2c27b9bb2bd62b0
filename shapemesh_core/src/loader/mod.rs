// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: scene loaders

pub mod json;
