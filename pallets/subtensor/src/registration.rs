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

impl<T: Config> Pallet<T> {
  pub const MAX_NAME_LENGTH: usize = 256;
  pub const MAX_DISCORD_LENGTH: usize = 256;
  pub const MAX_FIELD_LENGTH: usize = 1024;

  /// Registers a subnet owned by `coldkey` and returns its netuid
  pub fn do_register_network(
    coldkey: T::AccountId,
    hotkey: T::AccountId,
    identity: Option<SubnetIdentity>,
  ) -> Result<NetUid, DispatchError> {
    if let Some(identity) = &identity {
      ensure!(
        Self::is_valid_subnet_identity(identity),
        Error::<T>::InvalidIdentity
      );
    }

    let block: u64 = Self::get_current_block_as_u64();

    ensure!(
      !Self::exceeds_network_rate_limit(NetworkLastRegistered::<T>::get(), block),
      Error::<T>::NetworkTxRateLimitExceeded
    );

    let netuid: NetUid = TotalNetworks::<T>::get();

    ensure!(
      netuid < NetUid::MAX && !Self::if_subnet_exist(netuid),
      Error::<T>::MaxSubnetsReached
    );

    let cost: BalanceOf<T> = T::NetworkRegistrationCost::get();

    ensure!(
      Self::can_remove_balance_from_coldkey_account(&coldkey, cost),
      Error::<T>::NotEnoughBalanceToRegister
    );

    ensure!(
      Self::remove_balance_from_coldkey_account(&coldkey, cost),
      Error::<T>::NotEnoughBalanceToRegister
    );

    NetworksAdded::<T>::insert(netuid, true);
    SubnetOwner::<T>::insert(netuid, coldkey.clone());
    SubnetOwnerHotkey::<T>::insert(netuid, hotkey.clone());
    TotalNetworks::<T>::mutate(|n: &mut u16| *n += 1);
    NetworkLastRegistered::<T>::set(block);

    if let Some(identity) = identity {
      SubnetIdentities::<T>::insert(netuid, identity);
      Self::deposit_event(Event::SubnetIdentitySet(netuid));
    }

    log::info!(
      target: LOG_TARGET,
      "network {} registered at block {}",
      netuid,
      block
    );

    Self::deposit_event(Event::NetworkAdded { netuid, owner: coldkey, hotkey });

    Ok(netuid)
  }

  pub fn is_valid_subnet_identity(identity: &SubnetIdentity) -> bool {
    identity.subnet_name.len() <= Self::MAX_NAME_LENGTH
      && identity.github_repo.len() <= Self::MAX_FIELD_LENGTH
      && identity.subnet_contact.len() <= Self::MAX_FIELD_LENGTH
      && identity.subnet_url.len() <= Self::MAX_FIELD_LENGTH
      && identity.discord.len() <= Self::MAX_DISCORD_LENGTH
      && identity.description.len() <= Self::MAX_FIELD_LENGTH
      && identity.logo_url.len() <= Self::MAX_FIELD_LENGTH
      && identity.additional.len() <= Self::MAX_FIELD_LENGTH
  }

  pub fn if_subnet_exist(netuid: NetUid) -> bool {
    NetworksAdded::<T>::get(netuid)
  }

  pub fn is_subnet_owner(netuid: NetUid, account_id: &T::AccountId) -> bool {
    match SubnetOwner::<T>::get(netuid) {
      Some(owner) => &owner == account_id,
      None => false,
    }
  }
}
