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

use super::*;
use sp_runtime::traits::BadOrigin;

impl<T: Config> Pallet<T> {
  /// Origin checks, validation and storage write for one hyperparameter
  ///
  /// `who` is `None` for root. Signed callers must own the subnet and cannot
  /// touch root-only hyperparameters.
  pub fn do_set_hyperparameter(
    who: Option<T::AccountId>,
    netuid: NetUid,
    parameter: Hyperparameter,
    value: HyperparameterValue,
  ) -> DispatchResult {
    ensure!(
      Self::if_subnet_exist(netuid),
      Error::<T>::SubNetworkDoesNotExist
    );

    if let Some(account_id) = who {
      ensure!(!parameter.requires_root(), BadOrigin);
      ensure!(
        Self::is_subnet_owner(netuid, &account_id),
        Error::<T>::NotSubnetOwner
      );
    }

    ensure!(
      parameter.kind() == value.kind(),
      Error::<T>::InvalidHyperparameterValue
    );

    match (parameter, value) {
      (Hyperparameter::ServingRateLimit, HyperparameterValue::U64(v)) => ServingRateLimit::<T>::insert(netuid, v),
      (Hyperparameter::MinDifficulty, HyperparameterValue::U64(v)) => MinDifficulty::<T>::insert(netuid, v),
      (Hyperparameter::MaxDifficulty, HyperparameterValue::U64(v)) => MaxDifficulty::<T>::insert(netuid, v),
      (Hyperparameter::WeightsVersionKey, HyperparameterValue::U64(v)) => WeightsVersionKey::<T>::insert(netuid, v),
      (Hyperparameter::WeightsSetRateLimit, HyperparameterValue::U64(v)) => WeightsSetRateLimit::<T>::insert(netuid, v),
      (Hyperparameter::AdjustmentAlpha, HyperparameterValue::U64(v)) => AdjustmentAlpha::<T>::insert(netuid, v),
      (Hyperparameter::MaxWeightLimit, HyperparameterValue::U16(v)) => MaxWeightsLimit::<T>::insert(netuid, v),
      (Hyperparameter::ImmunityPeriod, HyperparameterValue::U16(v)) => ImmunityPeriod::<T>::insert(netuid, v),
      (Hyperparameter::MinAllowedWeights, HyperparameterValue::U16(v)) => MinAllowedWeights::<T>::insert(netuid, v),
      (Hyperparameter::Kappa, HyperparameterValue::U16(v)) => Kappa::<T>::insert(netuid, v),
      (Hyperparameter::Rho, HyperparameterValue::U16(v)) => Rho::<T>::insert(netuid, v),
      (Hyperparameter::ActivityCutoff, HyperparameterValue::U16(v)) => Self::set_activity_cutoff(netuid, v)?,
      (Hyperparameter::NetworkRegistrationAllowed, HyperparameterValue::Bool(v)) => NetworkRegistrationAllowed::<T>::insert(netuid, v),
      (Hyperparameter::NetworkPowRegistrationAllowed, HyperparameterValue::Bool(v)) => NetworkPowRegistrationAllowed::<T>::insert(netuid, v),
      (Hyperparameter::MinBurn, HyperparameterValue::U64(v)) => MinBurn::<T>::insert(netuid, v),
      (Hyperparameter::MaxBurn, HyperparameterValue::U64(v)) => MaxBurn::<T>::insert(netuid, v),
      (Hyperparameter::Difficulty, HyperparameterValue::U64(v)) => Difficulty::<T>::insert(netuid, v),
      (Hyperparameter::BondsMovingAverage, HyperparameterValue::U64(v)) => BondsMovingAverage::<T>::insert(netuid, v),
      (Hyperparameter::CommitRevealWeightsEnabled, HyperparameterValue::Bool(v)) => CommitRevealWeightsEnabled::<T>::insert(netuid, v),
      (Hyperparameter::LiquidAlphaEnabled, HyperparameterValue::Bool(v)) => LiquidAlphaOn::<T>::insert(netuid, v),
      (Hyperparameter::Yuma3Enabled, HyperparameterValue::Bool(v)) => Yuma3On::<T>::insert(netuid, v),
      (Hyperparameter::AlphaValues, HyperparameterValue::U16Pair(low, high)) => Self::set_alpha_values(netuid, low, high)?,
      (Hyperparameter::CommitRevealWeightsInterval, HyperparameterValue::U64(v)) => RevealPeriodEpochs::<T>::insert(netuid, v),
      // kinds were matched above
      _ => return Err(Error::<T>::InvalidHyperparameterValue.into()),
    }

    log::debug!(
      target: LOG_TARGET,
      "set {} on netuid {} to {:?}",
      parameter.name(),
      netuid,
      value
    );

    Self::deposit_event(Event::HyperparameterSet { netuid, parameter, value });

    Ok(())
  }

  fn set_activity_cutoff(netuid: NetUid, value: u16) -> DispatchResult {
    ensure!(
      value >= MinActivityCutoff::<T>::get(),
      Error::<T>::ActivityCutoffTooLow
    );

    ActivityCutoff::<T>::insert(netuid, value);

    Ok(())
  }

  fn set_alpha_values(netuid: NetUid, alpha_low: u16, alpha_high: u16) -> DispatchResult {
    ensure!(
      LiquidAlphaOn::<T>::get(netuid),
      Error::<T>::LiquidAlphaDisabled
    );

    ensure!(
      alpha_high >= ALPHA_HIGH_FLOOR,
      Error::<T>::AlphaHighTooLow
    );

    ensure!(
      alpha_low > 0 && alpha_low < ALPHA_HIGH_FLOOR,
      Error::<T>::AlphaLowOutOfRange
    );

    AlphaValues::<T>::insert(netuid, (alpha_low, alpha_high));

    Ok(())
  }

  pub fn set_min_activity_cutoff_value(value: u16) -> DispatchResult {
    MinActivityCutoff::<T>::set(value);

    Self::deposit_event(Event::SetMinActivityCutoff(value));

    Ok(())
  }

  /// Read one hyperparameter, subnets that were never set read their defaults
  pub fn get_hyperparameter(netuid: NetUid, parameter: Hyperparameter) -> HyperparameterValue {
    match parameter {
      Hyperparameter::ServingRateLimit => ServingRateLimit::<T>::get(netuid).into(),
      Hyperparameter::MinDifficulty => MinDifficulty::<T>::get(netuid).into(),
      Hyperparameter::MaxDifficulty => MaxDifficulty::<T>::get(netuid).into(),
      Hyperparameter::WeightsVersionKey => WeightsVersionKey::<T>::get(netuid).into(),
      Hyperparameter::WeightsSetRateLimit => WeightsSetRateLimit::<T>::get(netuid).into(),
      Hyperparameter::AdjustmentAlpha => AdjustmentAlpha::<T>::get(netuid).into(),
      Hyperparameter::MaxWeightLimit => MaxWeightsLimit::<T>::get(netuid).into(),
      Hyperparameter::ImmunityPeriod => ImmunityPeriod::<T>::get(netuid).into(),
      Hyperparameter::MinAllowedWeights => MinAllowedWeights::<T>::get(netuid).into(),
      Hyperparameter::Kappa => Kappa::<T>::get(netuid).into(),
      Hyperparameter::Rho => Rho::<T>::get(netuid).into(),
      Hyperparameter::ActivityCutoff => ActivityCutoff::<T>::get(netuid).into(),
      Hyperparameter::NetworkRegistrationAllowed => NetworkRegistrationAllowed::<T>::get(netuid).into(),
      Hyperparameter::NetworkPowRegistrationAllowed => NetworkPowRegistrationAllowed::<T>::get(netuid).into(),
      Hyperparameter::MinBurn => MinBurn::<T>::get(netuid).into(),
      Hyperparameter::MaxBurn => MaxBurn::<T>::get(netuid).into(),
      Hyperparameter::Difficulty => Difficulty::<T>::get(netuid).into(),
      Hyperparameter::BondsMovingAverage => BondsMovingAverage::<T>::get(netuid).into(),
      Hyperparameter::CommitRevealWeightsEnabled => CommitRevealWeightsEnabled::<T>::get(netuid).into(),
      Hyperparameter::LiquidAlphaEnabled => LiquidAlphaOn::<T>::get(netuid).into(),
      Hyperparameter::Yuma3Enabled => Yuma3On::<T>::get(netuid).into(),
      Hyperparameter::AlphaValues => AlphaValues::<T>::get(netuid).into(),
      Hyperparameter::CommitRevealWeightsInterval => RevealPeriodEpochs::<T>::get(netuid).into(),
    }
  }
}
