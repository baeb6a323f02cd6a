// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial backends.

mod flatvec;

pub use flatvec::FlatVec;
