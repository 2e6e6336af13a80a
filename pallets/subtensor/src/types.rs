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

use codec::{Decode, Encode};
use frame_support::dispatch::Vec;
use sp_runtime::RuntimeDebug;
use strum_macros::{EnumIter, IntoStaticStr};

/// Subnet identifier
pub type NetUid = u16;

/// Lowest `alpha_high` accepted, 0.8 in u16 fixed point
pub const ALPHA_HIGH_FLOOR: u16 = 52428;

/// Every tunable value stored per subnet
#[derive(
  Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, scale_info::TypeInfo, EnumIter, IntoStaticStr,
)]
pub enum Hyperparameter {
  ServingRateLimit,
  MinDifficulty,
  MaxDifficulty,
  WeightsVersionKey,
  WeightsSetRateLimit,
  AdjustmentAlpha,
  MaxWeightLimit,
  ImmunityPeriod,
  MinAllowedWeights,
  Kappa,
  Rho,
  ActivityCutoff,
  NetworkRegistrationAllowed,
  NetworkPowRegistrationAllowed,
  MinBurn,
  MaxBurn,
  Difficulty,
  BondsMovingAverage,
  CommitRevealWeightsEnabled,
  LiquidAlphaEnabled,
  Yuma3Enabled,
  AlphaValues,
  CommitRevealWeightsInterval,
}

impl Hyperparameter {
  pub fn kind(&self) -> HyperparameterKind {
    match self {
      Hyperparameter::ServingRateLimit
      | Hyperparameter::MinDifficulty
      | Hyperparameter::MaxDifficulty
      | Hyperparameter::WeightsVersionKey
      | Hyperparameter::WeightsSetRateLimit
      | Hyperparameter::AdjustmentAlpha
      | Hyperparameter::MinBurn
      | Hyperparameter::MaxBurn
      | Hyperparameter::Difficulty
      | Hyperparameter::BondsMovingAverage
      | Hyperparameter::CommitRevealWeightsInterval => HyperparameterKind::U64,
      Hyperparameter::MaxWeightLimit
      | Hyperparameter::ImmunityPeriod
      | Hyperparameter::MinAllowedWeights
      | Hyperparameter::Kappa
      | Hyperparameter::Rho
      | Hyperparameter::ActivityCutoff => HyperparameterKind::U16,
      Hyperparameter::NetworkRegistrationAllowed
      | Hyperparameter::NetworkPowRegistrationAllowed
      | Hyperparameter::CommitRevealWeightsEnabled
      | Hyperparameter::LiquidAlphaEnabled
      | Hyperparameter::Yuma3Enabled => HyperparameterKind::Bool,
      Hyperparameter::AlphaValues => HyperparameterKind::U16Pair,
    }
  }

  /// Parameters only the root origin may change, subnet owners are refused
  pub fn requires_root(&self) -> bool {
    matches!(
      self,
      Hyperparameter::MinDifficulty
        | Hyperparameter::WeightsSetRateLimit
        | Hyperparameter::MinBurn
        | Hyperparameter::MaxBurn
        | Hyperparameter::Difficulty
    )
  }

  pub fn name(&self) -> &'static str {
    self.into()
  }
}

#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, scale_info::TypeInfo)]
pub enum HyperparameterKind {
  U16,
  U64,
  Bool,
  U16Pair,
}

#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, scale_info::TypeInfo)]
pub enum HyperparameterValue {
  U16(u16),
  U64(u64),
  Bool(bool),
  U16Pair(u16, u16),
}

impl HyperparameterValue {
  pub fn kind(&self) -> HyperparameterKind {
    match self {
      HyperparameterValue::U16(_) => HyperparameterKind::U16,
      HyperparameterValue::U64(_) => HyperparameterKind::U64,
      HyperparameterValue::Bool(_) => HyperparameterKind::Bool,
      HyperparameterValue::U16Pair(..) => HyperparameterKind::U16Pair,
    }
  }
}

impl From<u16> for HyperparameterValue {
  fn from(value: u16) -> Self {
    HyperparameterValue::U16(value)
  }
}

impl From<u64> for HyperparameterValue {
  fn from(value: u64) -> Self {
    HyperparameterValue::U64(value)
  }
}

impl From<bool> for HyperparameterValue {
  fn from(value: bool) -> Self {
    HyperparameterValue::Bool(value)
  }
}

impl From<(u16, u16)> for HyperparameterValue {
  fn from(value: (u16, u16)) -> Self {
    HyperparameterValue::U16Pair(value.0, value.1)
  }
}

// Optional metadata attached to a subnet on registration
#[derive(Default, Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, scale_info::TypeInfo)]
pub struct SubnetIdentity {
  pub subnet_name: Vec<u8>,
  pub github_repo: Vec<u8>,
  pub subnet_contact: Vec<u8>,
  pub subnet_url: Vec<u8>,
  pub discord: Vec<u8>,
  pub description: Vec<u8>,
  pub logo_url: Vec<u8>,
  pub additional: Vec<u8>,
}

/// Snapshot of every hyperparameter of one subnet
#[derive(Default, Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, scale_info::TypeInfo)]
pub struct SubnetHyperparams {
  pub serving_rate_limit: u64,
  pub min_difficulty: u64,
  pub max_difficulty: u64,
  pub weights_version_key: u64,
  pub weights_set_rate_limit: u64,
  pub adjustment_alpha: u64,
  pub max_weights_limit: u16,
  pub immunity_period: u16,
  pub min_allowed_weights: u16,
  pub kappa: u16,
  pub rho: u16,
  pub activity_cutoff: u16,
  pub registration_allowed: bool,
  pub pow_registration_allowed: bool,
  pub min_burn: u64,
  pub max_burn: u64,
  pub difficulty: u64,
  pub bonds_moving_avg: u64,
  pub commit_reveal_weights_enabled: bool,
  pub liquid_alpha_enabled: bool,
  pub yuma3_enabled: bool,
  pub alpha_low: u16,
  pub alpha_high: u16,
  pub commit_reveal_period: u64,
}
