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

// cargo build --package pallet-subtensor --features runtime-benchmarks
use super::*;
use frame_benchmarking::{account, benchmarks, whitelist_account};
use frame_support::traits::Currency;
use frame_system::RawOrigin;
use sp_runtime::traits::Saturating;
use crate::Pallet as SubtensorModule;

const SEED: u32 = 0;

fn funded_account<T: Config>(name: &'static str, index: u32) -> T::AccountId {
	let caller: T::AccountId = account(name, index, SEED);
	let deposit_amount: BalanceOf<T> = T::NetworkRegistrationCost::get().saturating_mul(100u32.into());
	T::Currency::deposit_creating(&caller, deposit_amount);
	caller
}

benchmarks! {
	register_network {
		let caller = funded_account::<T>("caller", 0);
		whitelist_account!(caller);
		let hotkey: T::AccountId = account("hotkey", 0, SEED);
		let total_networks = SubtensorModule::<T>::total_networks();
	}: register_network(RawOrigin::Signed(caller.clone()), hotkey, Some(SubnetIdentity::default()))
	verify {
		assert_eq!(SubtensorModule::<T>::total_networks(), total_networks + 1, "TotalNetworks incorrect.");
	}

	set_hyperparameter {
		let caller = funded_account::<T>("caller", 0);
		whitelist_account!(caller);
		let hotkey: T::AccountId = account("hotkey", 0, SEED);
		let netuid = SubtensorModule::<T>::do_register_network(caller.clone(), hotkey, None)
			.map_err(|_| "register_network failed")?;
	}: set_hyperparameter(RawOrigin::Signed(caller.clone()), netuid, Hyperparameter::Kappa, HyperparameterValue::U16(109))
	verify {
		assert_eq!(Kappa::<T>::get(netuid), 109, "Kappa incorrect.");
	}

	set_min_activity_cutoff {
	}: set_min_activity_cutoff(RawOrigin::Root, 400)
	verify {
		assert_eq!(MinActivityCutoff::<T>::get(), 400, "MinActivityCutoff incorrect.");
	}

	set_network_rate_limit {
	}: set_network_rate_limit(RawOrigin::Root, 10)
	verify {
		assert_eq!(NetworkRateLimit::<T>::get(), 10, "NetworkRateLimit incorrect.");
	}

	impl_benchmark_test_suite!(
		SubtensorModule,
		crate::mock::new_test_ext(),
		crate::mock::Test
	);
}
