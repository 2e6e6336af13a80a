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
use crate as pallet_subtensor;
use frame_support::{
  parameter_types,
  traits::{Everything, Hooks},
};
use frame_system as system;
use sp_core::{ConstU128, ConstU16, ConstU64, H256};
use sp_runtime::BuildStorage;
use frame_support::sp_tracing;
use sp_runtime::{
	traits::{
		BlakeTwo256, IdentifyAccount, Verify, AccountIdLookup
	},
	MultiSignature
};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
	pub enum Test
	{
    System: system,
    Balances: pallet_balances,
    SubtensorModule: pallet_subtensor,
	}
);

parameter_types! {
  pub const BlockHashCount: u64 = 250;
  pub const SS58Prefix: u8 = 42;
}

pub type Signature = MultiSignature;

pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

// Balance of an account.
pub type Balance = u128;

// An index to a block.
#[allow(dead_code)]
pub type BlockNumber = u64;

pub const EXISTENTIAL_DEPOSIT: u128 = 500;

pub const NETWORK_REGISTRATION_COST: u128 = 1_000_000_000_000;

pub const MIN_ACTIVITY_CUTOFF: u16 = 360;

impl pallet_balances::Config for Test {
  type Balance = Balance;
  type RuntimeEvent = RuntimeEvent;
  type DustRemoval = ();
  type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
  type AccountStore = System;
  type MaxLocks = ();
  type WeightInfo = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type RuntimeHoldReason = ();
  type FreezeIdentifier = ();
  type MaxHolds = ();
  type MaxFreezes = ();
}

impl system::Config for Test {
  type BaseCallFilter = Everything;
  type BlockWeights = ();
  type BlockLength = ();
  type Block = Block;
  type DbWeight = ();
  type RuntimeOrigin = RuntimeOrigin;
  type RuntimeCall = RuntimeCall;
  type Nonce = u64;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountId = AccountId;
  type Lookup = AccountIdLookup<AccountId, ()>;
  type RuntimeEvent = RuntimeEvent;
  type BlockHashCount = BlockHashCount;
  type Version = ();
  type PalletInfo = PalletInfo;
  type AccountData = pallet_balances::AccountData<u128>;
  type OnNewAccount = ();
  type OnKilledAccount = ();
  type SystemWeightInfo = ();
  type SS58Prefix = SS58Prefix;
  type OnSetCode = ();
  type MaxConsumers = frame_support::traits::ConstU32<16>;
}

impl Config for Test {
  type WeightInfo = ();
	type RuntimeEvent = RuntimeEvent;
  type Currency = Balances;
  type NetworkRegistrationCost = ConstU128<NETWORK_REGISTRATION_COST>;
  type InitialMinActivityCutoff = ConstU16<MIN_ACTIVITY_CUTOFF>;
  type InitialNetworkRateLimit = ConstU64<0>;
}

pub fn new_test_ext() -> sp_io::TestExternalities {
  sp_tracing::try_init_simple();
	let storage = frame_system::GenesisConfig::<Test>::default()
		.build_storage()
		.unwrap();
  let mut ext = sp_io::TestExternalities::from(storage);
  // events are not recorded at genesis
  ext.execute_with(|| System::set_block_number(1));
  ext
}

pub fn new_test_ext_with_genesis(subtensor_module: crate::GenesisConfig<Test>) -> sp_io::TestExternalities {
  sp_tracing::try_init_simple();
  let storage = RuntimeGenesisConfig {
    system: Default::default(),
    balances: Default::default(),
    subtensor_module,
  }
  .build_storage()
  .unwrap();
  let mut ext = sp_io::TestExternalities::from(storage);
  ext.execute_with(|| System::set_block_number(1));
  ext
}

pub fn run_to_block(n: u64) {
  while System::block_number() < n {
    System::on_finalize(System::block_number());
    System::set_block_number(System::block_number() + 1);
    System::on_initialize(System::block_number());
  }
}
