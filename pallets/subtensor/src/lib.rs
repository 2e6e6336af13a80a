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

//! Subnet registry and per-subnet hyperparameters.
//!
//! Subnets are registered by a coldkey which becomes the subnet owner. The owner
//! may tune most hyperparameters of its subnet, a few are reserved to root.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;
use frame_system::{ensure_signed, ensure_signed_or_root};
use frame_support::{
	dispatch::{DispatchResult, DispatchError, Vec},
	ensure,
	traits::{tokens::WithdrawReasons, Get, Currency, ExistenceRequirement},
};

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

mod types;
mod admin;
mod registration;
mod utils;
mod info;

pub use types::{
	NetUid, Hyperparameter, HyperparameterKind, HyperparameterValue, SubnetIdentity, SubnetHyperparams,
	ALPHA_HIGH_FLOOR,
};

pub type BalanceOf<T> =
	<<T as Config>::Currency as Currency<<T as frame_system::Config>::AccountId>>::Balance;

const LOG_TARGET: &str = "runtime::subtensor";

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	/// This pallet's configuration trait
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Weight information for extrinsics in this pallet.
		type WeightInfo: WeightInfo;

		/// The overarching event type.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		type Currency: Currency<Self::AccountId> + Send + Sync;

		/// Amount withdrawn from the coldkey when registering a subnet
		#[pallet::constant]
		type NetworkRegistrationCost: Get<BalanceOf<Self>>;

		/// Initial floor for `ActivityCutoff`
		#[pallet::constant]
		type InitialMinActivityCutoff: Get<u16>;

		/// Initial blocks between two subnet registrations
		#[pallet::constant]
		type InitialNetworkRateLimit: Get<u64>;
	}

	/// Events for the pallet.
	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A subnet was registered
		NetworkAdded { netuid: NetUid, owner: T::AccountId, hotkey: T::AccountId },
		/// A subnet identity was stored
		SubnetIdentitySet(NetUid),
		/// A subnet hyperparameter changed
		HyperparameterSet { netuid: NetUid, parameter: Hyperparameter, value: HyperparameterValue },
		SetMinActivityCutoff(u16),
		SetNetworkRateLimit(u64),
	}

	// Errors inform users that something went wrong.
	#[pallet::error]
	pub enum Error<T> {
		/// The subnet does not exist
		SubNetworkDoesNotExist,
		/// Caller is not the owner of the subnet
		NotSubnetOwner,
		/// A transactor exceeded the rate limit for add network transaction
		NetworkTxRateLimitExceeded,
		/// Coldkey cannot pay the registration cost and stay alive
		NotEnoughBalanceToRegister,
		/// Every subnet identifier is in use
		MaxSubnetsReached,
		/// Identity field exceeds its length limit
		InvalidIdentity,
		/// Value type does not match the hyperparameter
		InvalidHyperparameterValue,
		/// Activity cutoff is being set below `MinActivityCutoff`
		ActivityCutoffTooLow,
		/// Alpha values can only be set while liquid alpha is enabled
		LiquidAlphaDisabled,
		/// Alpha high is below `ALPHA_HIGH_FLOOR`
		AlphaHighTooLow,
		/// Alpha low must be above zero and below `ALPHA_HIGH_FLOOR`
		AlphaLowOutOfRange,
	}

	#[pallet::type_value]
	pub fn DefaultServingRateLimit<T: Config>() -> u64 {
		50
	}
	#[pallet::type_value]
	pub fn DefaultMinDifficulty<T: Config>() -> u64 {
		10_000_000
	}
	#[pallet::type_value]
	pub fn DefaultMaxDifficulty<T: Config>() -> u64 {
		u64::MAX / 4
	}
	#[pallet::type_value]
	pub fn DefaultDifficulty<T: Config>() -> u64 {
		10_000_000
	}
	#[pallet::type_value]
	pub fn DefaultWeightsSetRateLimit<T: Config>() -> u64 {
		100
	}
	#[pallet::type_value]
	pub fn DefaultMaxWeightsLimit<T: Config>() -> u16 {
		u16::MAX
	}
	#[pallet::type_value]
	pub fn DefaultImmunityPeriod<T: Config>() -> u16 {
		4096
	}
	#[pallet::type_value]
	pub fn DefaultMinAllowedWeights<T: Config>() -> u16 {
		1
	}
	#[pallet::type_value]
	pub fn DefaultKappa<T: Config>() -> u16 {
		32_767
	}
	#[pallet::type_value]
	pub fn DefaultRho<T: Config>() -> u16 {
		10
	}
	#[pallet::type_value]
	pub fn DefaultActivityCutoff<T: Config>() -> u16 {
		5000
	}
	#[pallet::type_value]
	pub fn DefaultMinActivityCutoff<T: Config>() -> u16 {
		T::InitialMinActivityCutoff::get()
	}
	#[pallet::type_value]
	pub fn DefaultMinBurn<T: Config>() -> u64 {
		500_000
	}
	#[pallet::type_value]
	pub fn DefaultMaxBurn<T: Config>() -> u64 {
		100_000_000_000
	}
	#[pallet::type_value]
	pub fn DefaultBondsMovingAverage<T: Config>() -> u64 {
		900_000
	}
	#[pallet::type_value]
	pub fn DefaultAlphaValues<T: Config>() -> (u16, u16) {
		(45_875, 58_982)
	}
	#[pallet::type_value]
	pub fn DefaultRevealPeriodEpochs<T: Config>() -> u64 {
		1
	}
	#[pallet::type_value]
	pub fn DefaultNetworkRateLimit<T: Config>() -> u64 {
		T::InitialNetworkRateLimit::get()
	}

	/// Count of subnets, the next subnet takes this value as its netuid
	#[pallet::storage]
	#[pallet::getter(fn total_networks)]
	pub type TotalNetworks<T> = StorageValue<_, u16, ValueQuery>;

	// netuid => registered
	#[pallet::storage]
	pub type NetworksAdded<T> = StorageMap<_, Identity, NetUid, bool, ValueQuery>;

	// netuid => coldkey
	#[pallet::storage]
	pub type SubnetOwner<T: Config> = StorageMap<_, Identity, NetUid, T::AccountId>;

	// netuid => hotkey
	#[pallet::storage]
	pub type SubnetOwnerHotkey<T: Config> = StorageMap<_, Identity, NetUid, T::AccountId>;

	#[pallet::storage]
	pub type SubnetIdentities<T> = StorageMap<_, Identity, NetUid, SubnetIdentity>;

	/// Blocks required between two subnet registrations, 0 disables the limit
	#[pallet::storage]
	pub type NetworkRateLimit<T> = StorageValue<_, u64, ValueQuery, DefaultNetworkRateLimit<T>>;

	#[pallet::storage]
	pub type NetworkLastRegistered<T> = StorageValue<_, u64, ValueQuery>;

	/// Floor enforced when setting `ActivityCutoff`
	#[pallet::storage]
	#[pallet::getter(fn min_activity_cutoff)]
	pub type MinActivityCutoff<T> = StorageValue<_, u16, ValueQuery, DefaultMinActivityCutoff<T>>;

	//
	// Hyperparameters, all keyed by netuid
	//

	#[pallet::storage]
	#[pallet::getter(fn serving_rate_limit)]
	pub type ServingRateLimit<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultServingRateLimit<T>>;

	#[pallet::storage]
	#[pallet::getter(fn min_difficulty)]
	pub type MinDifficulty<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultMinDifficulty<T>>;

	#[pallet::storage]
	#[pallet::getter(fn max_difficulty)]
	pub type MaxDifficulty<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultMaxDifficulty<T>>;

	#[pallet::storage]
	#[pallet::getter(fn difficulty)]
	pub type Difficulty<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultDifficulty<T>>;

	#[pallet::storage]
	#[pallet::getter(fn weights_version_key)]
	pub type WeightsVersionKey<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn weights_set_rate_limit)]
	pub type WeightsSetRateLimit<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultWeightsSetRateLimit<T>>;

	#[pallet::storage]
	#[pallet::getter(fn adjustment_alpha)]
	pub type AdjustmentAlpha<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn max_weights_limit)]
	pub type MaxWeightsLimit<T> = StorageMap<_, Identity, NetUid, u16, ValueQuery, DefaultMaxWeightsLimit<T>>;

	#[pallet::storage]
	#[pallet::getter(fn immunity_period)]
	pub type ImmunityPeriod<T> = StorageMap<_, Identity, NetUid, u16, ValueQuery, DefaultImmunityPeriod<T>>;

	#[pallet::storage]
	#[pallet::getter(fn min_allowed_weights)]
	pub type MinAllowedWeights<T> = StorageMap<_, Identity, NetUid, u16, ValueQuery, DefaultMinAllowedWeights<T>>;

	#[pallet::storage]
	#[pallet::getter(fn kappa)]
	pub type Kappa<T> = StorageMap<_, Identity, NetUid, u16, ValueQuery, DefaultKappa<T>>;

	#[pallet::storage]
	#[pallet::getter(fn rho)]
	pub type Rho<T> = StorageMap<_, Identity, NetUid, u16, ValueQuery, DefaultRho<T>>;

	#[pallet::storage]
	#[pallet::getter(fn activity_cutoff)]
	pub type ActivityCutoff<T> = StorageMap<_, Identity, NetUid, u16, ValueQuery, DefaultActivityCutoff<T>>;

	#[pallet::storage]
	#[pallet::getter(fn network_registration_allowed)]
	pub type NetworkRegistrationAllowed<T> = StorageMap<_, Identity, NetUid, bool, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn network_pow_registration_allowed)]
	pub type NetworkPowRegistrationAllowed<T> = StorageMap<_, Identity, NetUid, bool, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn min_burn)]
	pub type MinBurn<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultMinBurn<T>>;

	#[pallet::storage]
	#[pallet::getter(fn max_burn)]
	pub type MaxBurn<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultMaxBurn<T>>;

	#[pallet::storage]
	#[pallet::getter(fn bonds_moving_average)]
	pub type BondsMovingAverage<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultBondsMovingAverage<T>>;

	#[pallet::storage]
	#[pallet::getter(fn commit_reveal_weights_enabled)]
	pub type CommitRevealWeightsEnabled<T> = StorageMap<_, Identity, NetUid, bool, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn liquid_alpha_on)]
	pub type LiquidAlphaOn<T> = StorageMap<_, Identity, NetUid, bool, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn yuma3_on)]
	pub type Yuma3On<T> = StorageMap<_, Identity, NetUid, bool, ValueQuery>;

	// netuid => (alpha_low, alpha_high)
	#[pallet::storage]
	#[pallet::getter(fn alpha_values)]
	pub type AlphaValues<T> = StorageMap<_, Identity, NetUid, (u16, u16), ValueQuery, DefaultAlphaValues<T>>;

	// Commit-reveal interval in epochs
	#[pallet::storage]
	#[pallet::getter(fn reveal_period_epochs)]
	pub type RevealPeriodEpochs<T> = StorageMap<_, Identity, NetUid, u64, ValueQuery, DefaultRevealPeriodEpochs<T>>;

	#[pallet::pallet]
	#[pallet::without_storage_info]
	pub struct Pallet<T>(_);

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Register a new subnet owned by the signing coldkey
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::register_network())]
		pub fn register_network(
			origin: OriginFor<T>,
			hotkey: T::AccountId,
			identity: Option<SubnetIdentity>,
		) -> DispatchResult {
			let coldkey: T::AccountId = ensure_signed(origin)?;
			Self::do_register_network(coldkey, hotkey, identity).map(|_| ())
		}

		/// Set one hyperparameter of a subnet
		///
		/// Root may set any hyperparameter, the subnet owner every one that does
		/// not require root.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::set_hyperparameter())]
		pub fn set_hyperparameter(
			origin: OriginFor<T>,
			netuid: NetUid,
			parameter: Hyperparameter,
			value: HyperparameterValue,
		) -> DispatchResult {
			let who: Option<T::AccountId> = ensure_signed_or_root(origin)?;
			Self::do_set_hyperparameter(who, netuid, parameter, value)
		}

		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::set_min_activity_cutoff())]
		pub fn set_min_activity_cutoff(origin: OriginFor<T>, value: u16) -> DispatchResult {
			ensure_root(origin)?;
			Self::set_min_activity_cutoff_value(value)
		}

		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::set_network_rate_limit())]
		pub fn set_network_rate_limit(origin: OriginFor<T>, value: u64) -> DispatchResult {
			ensure_root(origin)?;
			NetworkRateLimit::<T>::set(value);
			Self::deposit_event(Event::SetNetworkRateLimit(value));
			Ok(())
		}
	}

	#[pallet::genesis_config]
	#[derive(frame_support::DefaultNoBound)]
	pub struct GenesisConfig<T: Config> {
		pub min_activity_cutoff: Option<u16>,
		pub network_rate_limit: Option<u64>,
		#[serde(skip)]
		pub _config: sp_std::marker::PhantomData<T>,
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			if let Some(min_activity_cutoff) = self.min_activity_cutoff {
				MinActivityCutoff::<T>::set(min_activity_cutoff);
			}
			if let Some(network_rate_limit) = self.network_rate_limit {
				NetworkRateLimit::<T>::set(network_rate_limit);
			}
		}
	}
}

// Calls made into the subnet registry by bridges, e.g. the EVM precompile
impl<T: Config> SubnetInterface<T::AccountId> for Pallet<T> {
	fn register_network(
		coldkey: T::AccountId,
		hotkey: T::AccountId,
		identity: Option<SubnetIdentity>,
	) -> Result<NetUid, DispatchError> {
		Self::do_register_network(coldkey, hotkey, identity)
	}
	fn set_hyperparameter(
		who: Option<T::AccountId>,
		netuid: NetUid,
		parameter: Hyperparameter,
		value: HyperparameterValue,
	) -> DispatchResult {
		Self::do_set_hyperparameter(who, netuid, parameter, value)
	}
	fn get_hyperparameter(netuid: NetUid, parameter: Hyperparameter) -> HyperparameterValue {
		Self::get_hyperparameter(netuid, parameter)
	}
	fn if_subnet_exist(netuid: NetUid) -> bool {
		Self::if_subnet_exist(netuid)
	}
}

pub trait SubnetInterface<AccountId> {
	fn register_network(
		coldkey: AccountId,
		hotkey: AccountId,
		identity: Option<SubnetIdentity>,
	) -> Result<NetUid, DispatchError>;
	fn set_hyperparameter(
		who: Option<AccountId>,
		netuid: NetUid,
		parameter: Hyperparameter,
		value: HyperparameterValue,
	) -> DispatchResult;
	fn get_hyperparameter(netuid: NetUid, parameter: Hyperparameter) -> HyperparameterValue;
	fn if_subnet_exist(netuid: NetUid) -> bool;
}
