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

//! Subnet contract interface served at a fixed EVM address.
//!
//! Every `registerNetwork` overload and every `set<Name>` / `get<Name>` pair is a
//! Solidity function of [`SubnetPrecompile`]. Writes go through the
//! [`SubnetInterface`] seam of the subnet registry with the caller's mapped
//! account as the signer. Reads are views and may run in a static call.

#![cfg_attr(not(feature = "std"), no_std)]

use core::marker::PhantomData;
use fp_evm::{PrecompileFailure, PrecompileHandle};
use frame_support::weights::Weight;
use pallet_evm::{AddressMapping, GasWeightMapping};
use pallet_subtensor::{
	Hyperparameter, HyperparameterValue, NetUid, SubnetIdentity, SubnetInterface, WeightInfo,
};
use precompile_utils::prelude::*;
use sp_core::{ConstU32, H160, H256};
use sp_runtime::DispatchError;

#[cfg(test)]
mod mock;


/// Low bytes of the precompile address, `0x...0803`
pub const SUBNET_PRECOMPILE_INDEX: u64 = 2051;

const LOG_TARGET: &str = "runtime::subnet-precompile";

pub fn precompile_address() -> H160 {
	H160::from_low_u64_be(SUBNET_PRECOMPILE_INDEX)
}

// Identity field caps of the registry
pub type NameString = BoundedString<ConstU32<256>>;
pub type FieldString = BoundedString<ConstU32<1024>>;

pub struct SubnetPrecompile<R>(PhantomData<R>);

#[precompile_utils::precompile]
impl<R> SubnetPrecompile<R>
where
	R: pallet_evm::Config + pallet_subtensor::Config,
	R::AccountId: From<[u8; 32]>,
{
	#[precompile::public("registerNetwork(bytes32)")]
	fn register_network(handle: &mut impl PrecompileHandle, hotkey: H256) -> EvmResult<u16> {
		Self::register(handle, hotkey, None)
	}

	#[precompile::public(
		"registerNetwork(bytes32,string,string,string,string,string,string,string)"
	)]
	fn register_network_with_identity(
		handle: &mut impl PrecompileHandle,
		hotkey: H256,
		subnet_name: NameString,
		github_repo: FieldString,
		subnet_contact: FieldString,
		subnet_url: FieldString,
		discord: NameString,
		description: FieldString,
		additional: FieldString,
	) -> EvmResult<u16> {
		let identity = SubnetIdentity {
			subnet_name: subnet_name.into(),
			github_repo: github_repo.into(),
			subnet_contact: subnet_contact.into(),
			subnet_url: subnet_url.into(),
			discord: discord.into(),
			description: description.into(),
			logo_url: Default::default(),
			additional: additional.into(),
		};
		Self::register(handle, hotkey, Some(identity))
	}

	#[precompile::public(
		"registerNetwork(bytes32,string,string,string,string,string,string,string,string)"
	)]
	fn register_network_with_logo(
		handle: &mut impl PrecompileHandle,
		hotkey: H256,
		subnet_name: NameString,
		github_repo: FieldString,
		subnet_contact: FieldString,
		subnet_url: FieldString,
		discord: NameString,
		description: FieldString,
		logo_url: FieldString,
		additional: FieldString,
	) -> EvmResult<u16> {
		let identity = SubnetIdentity {
			subnet_name: subnet_name.into(),
			github_repo: github_repo.into(),
			subnet_contact: subnet_contact.into(),
			subnet_url: subnet_url.into(),
			discord: discord.into(),
			description: description.into(),
			logo_url: logo_url.into(),
			additional: additional.into(),
		};
		Self::register(handle, hotkey, Some(identity))
	}

	#[precompile::public("setServingRateLimit(uint16,uint64)")]
	fn set_serving_rate_limit(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::ServingRateLimit, value.into())
	}

	#[precompile::public("getServingRateLimit(uint16)")]
	#[precompile::view]
	fn get_serving_rate_limit(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::ServingRateLimit)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setMinDifficulty(uint16,uint64)")]
	fn set_min_difficulty(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::MinDifficulty, value.into())
	}

	#[precompile::public("getMinDifficulty(uint16)")]
	#[precompile::view]
	fn get_min_difficulty(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::MinDifficulty)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setMaxDifficulty(uint16,uint64)")]
	fn set_max_difficulty(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::MaxDifficulty, value.into())
	}

	#[precompile::public("getMaxDifficulty(uint16)")]
	#[precompile::view]
	fn get_max_difficulty(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::MaxDifficulty)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setWeightsVersionKey(uint16,uint64)")]
	fn set_weights_version_key(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::WeightsVersionKey, value.into())
	}

	#[precompile::public("getWeightsVersionKey(uint16)")]
	#[precompile::view]
	fn get_weights_version_key(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::WeightsVersionKey)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setWeightsSetRateLimit(uint16,uint64)")]
	fn set_weights_set_rate_limit(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::WeightsSetRateLimit, value.into())
	}

	#[precompile::public("getWeightsSetRateLimit(uint16)")]
	#[precompile::view]
	fn get_weights_set_rate_limit(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::WeightsSetRateLimit)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setAdjustmentAlpha(uint16,uint64)")]
	fn set_adjustment_alpha(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::AdjustmentAlpha, value.into())
	}

	#[precompile::public("getAdjustmentAlpha(uint16)")]
	#[precompile::view]
	fn get_adjustment_alpha(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::AdjustmentAlpha)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setMaxWeightLimit(uint16,uint16)")]
	fn set_max_weight_limit(handle: &mut impl PrecompileHandle, netuid: u16, value: u16) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::MaxWeightLimit, value.into())
	}

	#[precompile::public("getMaxWeightLimit(uint16)")]
	#[precompile::view]
	fn get_max_weight_limit(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u16> {
		match Self::get(handle, netuid, Hyperparameter::MaxWeightLimit)? {
			HyperparameterValue::U16(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setImmunityPeriod(uint16,uint16)")]
	fn set_immunity_period(handle: &mut impl PrecompileHandle, netuid: u16, value: u16) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::ImmunityPeriod, value.into())
	}

	#[precompile::public("getImmunityPeriod(uint16)")]
	#[precompile::view]
	fn get_immunity_period(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u16> {
		match Self::get(handle, netuid, Hyperparameter::ImmunityPeriod)? {
			HyperparameterValue::U16(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setMinAllowedWeights(uint16,uint16)")]
	fn set_min_allowed_weights(handle: &mut impl PrecompileHandle, netuid: u16, value: u16) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::MinAllowedWeights, value.into())
	}

	#[precompile::public("getMinAllowedWeights(uint16)")]
	#[precompile::view]
	fn get_min_allowed_weights(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u16> {
		match Self::get(handle, netuid, Hyperparameter::MinAllowedWeights)? {
			HyperparameterValue::U16(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setKappa(uint16,uint16)")]
	fn set_kappa(handle: &mut impl PrecompileHandle, netuid: u16, value: u16) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::Kappa, value.into())
	}

	#[precompile::public("getKappa(uint16)")]
	#[precompile::view]
	fn get_kappa(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u16> {
		match Self::get(handle, netuid, Hyperparameter::Kappa)? {
			HyperparameterValue::U16(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setRho(uint16,uint16)")]
	fn set_rho(handle: &mut impl PrecompileHandle, netuid: u16, value: u16) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::Rho, value.into())
	}

	#[precompile::public("getRho(uint16)")]
	#[precompile::view]
	fn get_rho(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u16> {
		match Self::get(handle, netuid, Hyperparameter::Rho)? {
			HyperparameterValue::U16(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setActivityCutoff(uint16,uint16)")]
	fn set_activity_cutoff(handle: &mut impl PrecompileHandle, netuid: u16, value: u16) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::ActivityCutoff, value.into())
	}

	#[precompile::public("getActivityCutoff(uint16)")]
	#[precompile::view]
	fn get_activity_cutoff(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u16> {
		match Self::get(handle, netuid, Hyperparameter::ActivityCutoff)? {
			HyperparameterValue::U16(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setNetworkRegistrationAllowed(uint16,bool)")]
	fn set_network_registration_allowed(handle: &mut impl PrecompileHandle, netuid: u16, value: bool) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::NetworkRegistrationAllowed, value.into())
	}

	#[precompile::public("getNetworkRegistrationAllowed(uint16)")]
	#[precompile::view]
	fn get_network_registration_allowed(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<bool> {
		match Self::get(handle, netuid, Hyperparameter::NetworkRegistrationAllowed)? {
			HyperparameterValue::Bool(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setNetworkPowRegistrationAllowed(uint16,bool)")]
	fn set_network_pow_registration_allowed(handle: &mut impl PrecompileHandle, netuid: u16, value: bool) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::NetworkPowRegistrationAllowed, value.into())
	}

	#[precompile::public("getNetworkPowRegistrationAllowed(uint16)")]
	#[precompile::view]
	fn get_network_pow_registration_allowed(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<bool> {
		match Self::get(handle, netuid, Hyperparameter::NetworkPowRegistrationAllowed)? {
			HyperparameterValue::Bool(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setMinBurn(uint16,uint64)")]
	fn set_min_burn(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::MinBurn, value.into())
	}

	#[precompile::public("getMinBurn(uint16)")]
	#[precompile::view]
	fn get_min_burn(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::MinBurn)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setMaxBurn(uint16,uint64)")]
	fn set_max_burn(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::MaxBurn, value.into())
	}

	#[precompile::public("getMaxBurn(uint16)")]
	#[precompile::view]
	fn get_max_burn(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::MaxBurn)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setDifficulty(uint16,uint64)")]
	fn set_difficulty(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::Difficulty, value.into())
	}

	#[precompile::public("getDifficulty(uint16)")]
	#[precompile::view]
	fn get_difficulty(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::Difficulty)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setBondsMovingAverage(uint16,uint64)")]
	fn set_bonds_moving_average(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::BondsMovingAverage, value.into())
	}

	#[precompile::public("getBondsMovingAverage(uint16)")]
	#[precompile::view]
	fn get_bonds_moving_average(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::BondsMovingAverage)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setCommitRevealWeightsEnabled(uint16,bool)")]
	fn set_commit_reveal_weights_enabled(handle: &mut impl PrecompileHandle, netuid: u16, value: bool) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::CommitRevealWeightsEnabled, value.into())
	}

	#[precompile::public("getCommitRevealWeightsEnabled(uint16)")]
	#[precompile::view]
	fn get_commit_reveal_weights_enabled(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<bool> {
		match Self::get(handle, netuid, Hyperparameter::CommitRevealWeightsEnabled)? {
			HyperparameterValue::Bool(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setLiquidAlphaEnabled(uint16,bool)")]
	fn set_liquid_alpha_enabled(handle: &mut impl PrecompileHandle, netuid: u16, value: bool) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::LiquidAlphaEnabled, value.into())
	}

	#[precompile::public("getLiquidAlphaEnabled(uint16)")]
	#[precompile::view]
	fn get_liquid_alpha_enabled(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<bool> {
		match Self::get(handle, netuid, Hyperparameter::LiquidAlphaEnabled)? {
			HyperparameterValue::Bool(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setYuma3Enabled(uint16,bool)")]
	fn set_yuma3_enabled(handle: &mut impl PrecompileHandle, netuid: u16, value: bool) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::Yuma3Enabled, value.into())
	}

	#[precompile::public("getYuma3Enabled(uint16)")]
	#[precompile::view]
	fn get_yuma3_enabled(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<bool> {
		match Self::get(handle, netuid, Hyperparameter::Yuma3Enabled)? {
			HyperparameterValue::Bool(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setAlphaValues(uint16,uint16,uint16)")]
	fn set_alpha_values(
		handle: &mut impl PrecompileHandle,
		netuid: u16,
		alpha_low: u16,
		alpha_high: u16,
	) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::AlphaValues, (alpha_low, alpha_high).into())
	}

	#[precompile::public("getAlphaValues(uint16)")]
	#[precompile::view]
	fn get_alpha_values(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<(u16, u16)> {
		match Self::get(handle, netuid, Hyperparameter::AlphaValues)? {
			HyperparameterValue::U16Pair(low, high) => Ok((low, high)),
			other => Err(Self::unexpected_kind(other)),
		}
	}

	#[precompile::public("setCommitRevealWeightsInterval(uint16,uint64)")]
	fn set_commit_reveal_weights_interval(handle: &mut impl PrecompileHandle, netuid: u16, value: u64) -> EvmResult {
		Self::set(handle, netuid, Hyperparameter::CommitRevealWeightsInterval, value.into())
	}

	#[precompile::public("getCommitRevealWeightsInterval(uint16)")]
	#[precompile::view]
	fn get_commit_reveal_weights_interval(handle: &mut impl PrecompileHandle, netuid: u16) -> EvmResult<u64> {
		match Self::get(handle, netuid, Hyperparameter::CommitRevealWeightsInterval)? {
			HyperparameterValue::U64(value) => Ok(value),
			other => Err(Self::unexpected_kind(other)),
		}
	}
}

impl<R> SubnetPrecompile<R>
where
	R: pallet_evm::Config + pallet_subtensor::Config,
	R::AccountId: From<[u8; 32]>,
{
	fn caller(handle: &mut impl PrecompileHandle) -> R::AccountId {
		R::AddressMapping::into_account_id(handle.context().caller)
	}

	fn record_weight(handle: &mut impl PrecompileHandle, weight: Weight) -> EvmResult {
		handle.record_cost(<R as pallet_evm::Config>::GasWeightMapping::weight_to_gas(weight))?;
		Ok(())
	}

	fn register(
		handle: &mut impl PrecompileHandle,
		hotkey: H256,
		identity: Option<SubnetIdentity>,
	) -> EvmResult<u16> {
		Self::record_weight(handle, <R as pallet_subtensor::Config>::WeightInfo::register_network())?;

		let coldkey = Self::caller(handle);
		let hotkey = R::AccountId::from(hotkey.0);

		let netuid = <pallet_subtensor::Pallet<R> as SubnetInterface<R::AccountId>>::register_network(
			coldkey.clone(),
			hotkey,
			identity,
		)
		.map_err(Self::dispatch_revert)?;

		log::info!(target: LOG_TARGET, "{:?} registered subnet {:?}", coldkey, netuid);

		Ok(netuid)
	}

	fn set(
		handle: &mut impl PrecompileHandle,
		netuid: NetUid,
		parameter: Hyperparameter,
		value: HyperparameterValue,
	) -> EvmResult {
		Self::record_weight(handle, <R as pallet_subtensor::Config>::WeightInfo::set_hyperparameter())?;

		let who = Self::caller(handle);
		log::debug!(target: LOG_TARGET, "{:?} sets {} on {:?}", who, parameter.name(), netuid);

		<pallet_subtensor::Pallet<R> as SubnetInterface<R::AccountId>>::set_hyperparameter(
			Some(who),
			netuid,
			parameter,
			value,
		)
		.map_err(Self::dispatch_revert)
	}

	fn get(
		handle: &mut impl PrecompileHandle,
		netuid: NetUid,
		parameter: Hyperparameter,
	) -> EvmResult<HyperparameterValue> {
		// existence check plus the parameter itself
		handle.record_cost(RuntimeHelper::<R>::db_read_gas_cost().saturating_mul(2))?;

		if !<pallet_subtensor::Pallet<R> as SubnetInterface<R::AccountId>>::if_subnet_exist(netuid) {
			return Err(revert("SubNetworkDoesNotExist"))
		}

		Ok(<pallet_subtensor::Pallet<R> as SubnetInterface<R::AccountId>>::get_hyperparameter(
			netuid,
			parameter,
		))
	}

	fn dispatch_revert(error: DispatchError) -> PrecompileFailure {
		log::debug!(target: LOG_TARGET, "reverted: {:?}", error);
		revert(<&'static str>::from(error))
	}

	fn unexpected_kind(value: HyperparameterValue) -> PrecompileFailure {
		log::error!(target: LOG_TARGET, "stored value {:?} does not match its getter", value);
		revert("unexpected hyperparameter kind")
	}
}
