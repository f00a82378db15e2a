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

//! Chain metadata a transfer is built from.

use crate::Error;
use core::fmt;

/// Identifier of a chain in the registry, usually its genesis hash in hex.
pub type ChainId = String;

/// What the chain registry knows about a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainModel {
	pub chain_id: ChainId,
	/// Whether this chain is the relay chain of its consensus system.
	pub is_relaychain: bool,
	/// Whether accounts are 20-byte Ethereum style keys.
	pub is_ethereum_based: bool,
}

impl ChainModel {
	pub fn new(chain_id: impl Into<ChainId>, is_relaychain: bool, is_ethereum_based: bool) -> Self {
		Self { chain_id: chain_id.into(), is_relaychain, is_ethereum_based }
	}

	pub fn relaychain(chain_id: impl Into<ChainId>) -> Self {
		Self::new(chain_id, true, false)
	}

	pub fn parachain(chain_id: impl Into<ChainId>) -> Self {
		Self::new(chain_id, false, false)
	}

	pub fn ethereum_parachain(chain_id: impl Into<ChainId>) -> Self {
		Self::new(chain_id, false, true)
	}
}

/// Globally unique asset key: the chain and the asset index on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChainAssetId {
	pub chain_id: ChainId,
	pub asset_id: u32,
}

impl ChainAssetId {
	pub fn new(chain_id: impl Into<ChainId>, asset_id: u32) -> Self {
		Self { chain_id: chain_id.into(), asset_id }
	}
}

impl fmt::Display for ChainAssetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.chain_id, self.asset_id)
	}
}

/// An asset together with the chain it lives on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainAsset {
	pub chain: ChainModel,
	pub asset_id: u32,
}

impl ChainAsset {
	pub fn new(chain: ChainModel, asset_id: u32) -> Self {
		Self { chain, asset_id }
	}

	pub fn chain_asset_id(&self) -> ChainAssetId {
		ChainAssetId::new(self.chain.chain_id.clone(), self.asset_id)
	}
}

/// Account on the destination chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccountId {
	/// Substrate style 32-byte account.
	Id32([u8; 32]),
	/// Ethereum style 20-byte key.
	Key20([u8; 20]),
}

impl AccountId {
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			AccountId::Id32(id) => id,
			AccountId::Key20(key) => key,
		}
	}
}

impl TryFrom<&[u8]> for AccountId {
	type Error = Error;

	fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
		if let Ok(id) = <[u8; 32]>::try_from(bytes) {
			return Ok(AccountId::Id32(id))
		}
		<[u8; 20]>::try_from(bytes)
			.map(AccountId::Key20)
			.map_err(|_| Error::corrupted(format!("account of {} bytes", bytes.len())))
	}
}

/// Where a transfer goes: the chain, its parachain id if it is one, and the recipient.
///
/// Only built through [`XcmTransferDestination::new`], so the account always fits the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XcmTransferDestination {
	chain: ChainModel,
	parachain_id: Option<u32>,
	account_id: AccountId,
}

impl XcmTransferDestination {
	/// Check that `account_id` matches the addressing scheme of `chain`.
	pub fn new(chain: ChainModel, parachain_id: Option<u32>, account_id: AccountId) -> Result<Self, Error> {
		match (chain.is_ethereum_based, account_id) {
			(true, AccountId::Key20(_)) | (false, AccountId::Id32(_)) =>
				Ok(Self { chain, parachain_id, account_id }),
			(_, account_id) => Err(Error::InvalidAccountId {
				chain_id: chain.chain_id,
				length: account_id.as_bytes().len(),
			}),
		}
	}

	pub fn chain(&self) -> &ChainModel {
		&self.chain
	}

	pub fn parachain_id(&self) -> Option<u32> {
		self.parachain_id
	}

	pub fn account_id(&self) -> &AccountId {
		&self.account_id
	}
}

/// The chain holding the reserve of the transferred asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XcmTransferReserve {
	pub chain: ChainModel,
	pub parachain_id: Option<u32>,
}

impl XcmTransferReserve {
	pub fn new(chain: ChainModel, parachain_id: Option<u32>) -> Self {
		Self { chain, parachain_id }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	#[test]
	fn chain_asset_id_display() {
		let asset = ChainAsset::new(ChainModel::parachain("0xabcd"), 3);
		assert_eq!(asset.chain_asset_id().to_string(), "0xabcd:3");
	}

	#[test]
	fn account_ids_from_bytes() {
		assert_eq!(AccountId::try_from(&[1u8; 32][..]).unwrap(), AccountId::Id32([1; 32]));
		assert_eq!(AccountId::try_from(&[2u8; 20][..]).unwrap(), AccountId::Key20([2; 20]));
		assert_matches!(AccountId::try_from(&[3u8; 31][..]), Err(Error::DataCorruption(_)));
	}

	#[test]
	fn destination_account_must_match_chain() {
		assert!(XcmTransferDestination::new(
			ChainModel::ethereum_parachain("moonbeam"),
			Some(2004),
			AccountId::Key20([0; 20])
		)
		.is_ok());

		assert_matches!(
			XcmTransferDestination::new(ChainModel::relaychain("polkadot"), None, AccountId::Key20([0; 20])),
			Err(Error::InvalidAccountId { chain_id, length: 20 }) if chain_id == "polkadot"
		);
		assert_matches!(
			XcmTransferDestination::new(
				ChainModel::ethereum_parachain("moonbeam"),
				Some(2004),
				AccountId::Id32([0; 32])
			),
			Err(Error::InvalidAccountId { length: 32, .. })
		);
	}
}
