use super::*;

impl<T: Config> Pallet<T> {
  pub fn get_subnet_hyperparams(netuid: NetUid) -> Option<SubnetHyperparams> {
    if !Self::if_subnet_exist(netuid) {
      return None;
    }

    let (alpha_low, alpha_high) = Self::alpha_values(netuid);

    Some(SubnetHyperparams {
      serving_rate_limit: Self::serving_rate_limit(netuid),
      min_difficulty: Self::min_difficulty(netuid),
      max_difficulty: Self::max_difficulty(netuid),
      weights_version_key: Self::weights_version_key(netuid),
      weights_set_rate_limit: Self::weights_set_rate_limit(netuid),
      adjustment_alpha: Self::adjustment_alpha(netuid),
      max_weights_limit: Self::max_weights_limit(netuid),
      immunity_period: Self::immunity_period(netuid),
      min_allowed_weights: Self::min_allowed_weights(netuid),
      kappa: Self::kappa(netuid),
      rho: Self::rho(netuid),
      activity_cutoff: Self::activity_cutoff(netuid),
      registration_allowed: Self::network_registration_allowed(netuid),
      pow_registration_allowed: Self::network_pow_registration_allowed(netuid),
      min_burn: Self::min_burn(netuid),
      max_burn: Self::max_burn(netuid),
      difficulty: Self::difficulty(netuid),
      bonds_moving_avg: Self::bonds_moving_average(netuid),
      commit_reveal_weights_enabled: Self::commit_reveal_weights_enabled(netuid),
      liquid_alpha_enabled: Self::liquid_alpha_on(netuid),
      yuma3_enabled: Self::yuma3_on(netuid),
      alpha_low,
      alpha_high,
      commit_reveal_period: Self::reveal_period_epochs(netuid),
    })
  }

  pub fn get_subnet_identity(netuid: NetUid) -> Option<SubnetIdentity> {
    SubnetIdentities::<T>::get(netuid)
  }
}
