// Copyright (C) Hypertensor.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Weights for pallet_subtensor

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

/// Weight functions needed for pallet_subtensor.
pub trait WeightInfo {
	fn register_network() -> Weight;
	fn set_hyperparameter() -> Weight;
	fn set_min_activity_cutoff() -> Weight;
	fn set_network_rate_limit() -> Weight;
}

/// Weights for pallet_subtensor using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: SubtensorModule TotalNetworks (r:1 w:1)
	/// Storage: SubtensorModule NetworkRateLimit (r:1 w:0)
	/// Storage: SubtensorModule NetworkLastRegistered (r:1 w:1)
	/// Storage: System Account (r:1 w:1)
	fn register_network() -> Weight {
		Weight::from_parts(48_000_000, 3593)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(7_u64))
	}
	/// Storage: SubtensorModule NetworksAdded (r:1 w:0)
	/// Storage: SubtensorModule SubnetOwner (r:1 w:0)
	fn set_hyperparameter() -> Weight {
		Weight::from_parts(21_000_000, 3513)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn set_min_activity_cutoff() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn set_network_rate_limit() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn register_network() -> Weight {
		Weight::from_parts(48_000_000, 3593)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(7_u64))
	}
	fn set_hyperparameter() -> Weight {
		Weight::from_parts(21_000_000, 3513)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_min_activity_cutoff() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_network_rate_limit() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
}
