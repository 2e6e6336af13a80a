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
use sp_runtime::traits::Saturating;

impl<T: Config> Pallet<T> {
    pub fn get_network_rate_limit() -> u64 {
        NetworkRateLimit::<T>::get()
    }

    pub fn exceeds_network_rate_limit(prev_tx_block: u64, current_block: u64) -> bool {
        let rate_limit: u64 = Self::get_network_rate_limit();
        if rate_limit == 0 || prev_tx_block == 0 {
            return false;
        }

        current_block.saturating_sub(prev_tx_block) <= rate_limit
    }

    pub fn get_current_block_as_u64() -> u64 {
        TryInto::try_into(<frame_system::Pallet<T>>::block_number())
            .ok()
            .expect("blockchain will not exceed 2^64 blocks; QED.")
    }

    pub fn get_coldkey_balance(account_id: &T::AccountId) -> BalanceOf<T> {
        T::Currency::free_balance(account_id)
    }

    pub fn can_remove_balance_from_coldkey_account(
        account_id: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> bool {
        let current_balance = Self::get_coldkey_balance(account_id);
        if amount > current_balance {
            return false;
        }

        let new_potential_balance = current_balance.saturating_sub(amount);
        T::Currency::ensure_can_withdraw(
            account_id,
            amount,
            WithdrawReasons::except(WithdrawReasons::TIP),
            new_potential_balance,
        )
        .is_ok()
    }

    pub fn remove_balance_from_coldkey_account(
        account_id: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> bool {
        match T::Currency::withdraw(
            account_id,
            amount,
            WithdrawReasons::except(WithdrawReasons::TIP),
            ExistenceRequirement::KeepAlive,
        ) {
            Ok(_result) => true,
            Err(_error) => false,
        }
    }
}
