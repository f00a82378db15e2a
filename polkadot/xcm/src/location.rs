// Copyright (C) Parity Technologies (UK) Ltd.
// This file is part of Polkadot.

// Polkadot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Polkadot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Polkadot.  If not, see <http://www.gnu.org/licenses/>.

//! Relative addressing between chains of one relay chain.
//!
//! Only the two levels of a relay chain and its parachains exist here, so a location seen from
//! one chain reaches another one with at most one hop up to the relay chain followed by an
//! optional `Parachain` junction.

use crate::{
	chain::{ChainModel, XcmTransferDestination, XcmTransferReserve},
	family::{Location, XcmFamily},
	junctions::Multilocation,
};

/// How two chains of one relay chain relate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChainRelation {
	SameChain,
	RelayToParachain,
	ParachainToRelay,
	Siblings,
}

impl ChainRelation {
	pub fn between(origin: &ChainModel, target: &ChainModel) -> Self {
		match (origin.chain_id == target.chain_id, origin.is_relaychain, target.is_relaychain) {
			(true, _, _) => ChainRelation::SameChain,
			(false, true, _) => ChainRelation::RelayToParachain,
			(false, false, true) => ChainRelation::ParachainToRelay,
			(false, false, false) => ChainRelation::Siblings,
		}
	}

	/// Hops up from the origin to the common ancestor.
	pub fn parents(self) -> u8 {
		match self {
			ChainRelation::SameChain | ChainRelation::RelayToParachain => 0,
			ChainRelation::ParachainToRelay | ChainRelation::Siblings => 1,
		}
	}
}

/// The recipient of a transfer as seen from `origin`.
pub fn destination_location<F: XcmFamily>(
	origin: &ChainModel,
	destination: &XcmTransferDestination,
) -> Location<F> {
	let parents = ChainRelation::between(origin, destination.chain()).parents();
	let account = F::account(destination.account_id());
	match destination.parachain_id() {
		Some(id) => Multilocation::new(parents, [F::parachain(id), account]),
		None => Multilocation::new(parents, [account]),
	}
}

/// The reserve chain as seen from `origin`.
pub fn reserve_location<F: XcmFamily>(origin: &ChainModel, reserve: &XcmTransferReserve) -> Location<F> {
	let parents = ChainRelation::between(origin, &reserve.chain).parents();
	match reserve.parachain_id {
		Some(id) => Multilocation::new(parents, [F::parachain(id)]),
		None => Multilocation::new(parents, []),
	}
}
