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

//! The cross-chain transfers configuration document.
//!
//! It names, per asset, where the reserve of the asset lives, which chains the asset can be sent
//! to and which instructions the receiving side executes. Instruction lists are shared between
//! transfers and referenced by key.

use crate::{
	chain::{ChainAssetId, ChainId},
	Error,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Root of the configuration document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmTransfers {
	/// Reserve locations keyed by asset location name.
	pub assets_location: BTreeMap<String, XcmAssetLocation>,
	/// Instruction name lists keyed by the name fees refer to them with.
	pub instructions: BTreeMap<String, Vec<String>>,
	/// Delivery fee configuration per chain; carried along untouched.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub network_delivery_fee: BTreeMap<ChainId, Value>,
	pub chains: Vec<XcmChain>,
}

/// Reserve of one asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmAssetLocation {
	/// The chain hosting the reserve.
	pub chain_id: ChainId,
	/// Fee paid for executing on the reserve chain, when the transfer goes through it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reserve_fee: Option<XcmAssetFee>,
	pub multi_location: XcmAssetPath,
}

/// Components of an asset location as written in the configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmAssetPath {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parachain_id: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pallet_instance: Option<u8>,
	/// Hex encoded key.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub general_key: Option<String>,
	/// Decimal index. Kept textual since it may exceed `u64`.
	#[serde(
		default,
		deserialize_with = "string_or_number",
		skip_serializing_if = "Option::is_none"
	)]
	pub general_index: Option<String>,
	/// Explicit parent count, only read for [`LocationType::Concrete`] paths.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parents: Option<u8>,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
	Ok(match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => None,
		Some(Value::String(raw)) => Some(raw),
		// JSON numbers above `u64` lose precision while parsing, so those must be quoted.
		Some(Value::Number(number)) => match number.as_u64() {
			Some(index) => Some(index.to_string()),
			None => return Err(serde::de::Error::custom(format!(
				"general index {number} is not a `u64`, write wider indices as decimal strings"
			))),
		},
		Some(other) =>
			return Err(serde::de::Error::custom(format!("expected a general index, got {other}"))),
	})
}

/// How a configured asset path is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
	/// Seen from the relay chain: `Parachain` first, parents follow the origin.
	Absolute,
	/// Seen from the reserve chain itself when the origin is the reserve.
	Relative,
	/// Taken as written, including the parent count.
	Concrete,
}

/// Pallet a transfer is submitted through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
	Xtokens,
	Xcmpallet,
	#[serde(alias = "xcmpallet-teleport")]
	Teleport,
	#[serde(other)]
	Unknown,
}

/// Fee configuration of one side of a transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcmAssetFee {
	pub mode: XcmFeeMode,
	/// Key into [`XcmTransfers::instructions`].
	pub instructions: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcmFeeMode {
	#[serde(rename = "type")]
	pub mode_type: FeeModeType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeModeType {
	Standard,
	Proportional,
	#[serde(other)]
	Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmChain {
	pub chain_id: ChainId,
	pub assets: Vec<XcmAsset>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmAsset {
	pub asset_id: u32,
	/// Key into [`XcmTransfers::assets_location`].
	pub asset_location: String,
	pub asset_location_path: XcmAssetLocationPath,
	pub xcm_transfers: Vec<XcmAssetTransfer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcmAssetLocationPath {
	#[serde(rename = "type")]
	pub location_type: LocationType,
	/// The path itself, required for [`LocationType::Concrete`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub path: Option<XcmAssetPath>,
}

/// A configured route of an asset to another chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcmAssetTransfer {
	#[serde(rename = "type")]
	pub transfer_type: TransferType,
	pub destination: XcmAssetDestination,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmAssetDestination {
	pub chain_id: ChainId,
	pub asset_id: u32,
	pub fee: XcmAssetFee,
}

/// Resolved reserve path of an asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservePath {
	pub location_type: LocationType,
	pub path: XcmAssetPath,
}

impl XcmTransfers {
	pub fn from_json(json: &str) -> Result<Self, Error> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn asset(&self, chain_asset_id: &ChainAssetId) -> Option<&XcmAsset> {
		self.chains
			.iter()
			.find(|chain| chain.chain_id == chain_asset_id.chain_id)?
			.assets
			.iter()
			.find(|asset| asset.asset_id == chain_asset_id.asset_id)
	}

	/// The route of `chain_asset_id` to `destination_chain_id`.
	pub fn transfer(
		&self,
		chain_asset_id: &ChainAssetId,
		destination_chain_id: &str,
	) -> Option<&XcmAssetTransfer> {
		self.asset(chain_asset_id)?
			.xcm_transfers
			.iter()
			.find(|transfer| transfer.destination.chain_id == destination_chain_id)
	}

	/// Where the reserve of `chain_asset_id` is, as configured.
	///
	/// Concrete paths are owned by the asset; the others are shared through
	/// [`XcmTransfers::assets_location`].
	pub fn reserve_path(&self, chain_asset_id: &ChainAssetId) -> Option<ReservePath> {
		let asset = self.asset(chain_asset_id)?;
		let location_type = asset.asset_location_path.location_type;
		let path = match location_type {
			LocationType::Concrete => asset.asset_location_path.path.clone()?,
			LocationType::Absolute | LocationType::Relative =>
				self.assets_location.get(&asset.asset_location)?.multi_location.clone(),
		};
		Some(ReservePath { location_type, path })
	}

	fn reserve(&self, chain_asset_id: &ChainAssetId) -> Option<&XcmAssetLocation> {
		self.assets_location.get(&self.asset(chain_asset_id)?.asset_location)
	}

	/// Fee of executing on the reserve chain, if the transfer passes through it.
	pub fn reserve_fee(&self, chain_asset_id: &ChainAssetId) -> Option<&XcmAssetFee> {
		self.reserve(chain_asset_id)?.reserve_fee.as_ref()
	}

	pub fn reserve_chain_id(&self, chain_asset_id: &ChainAssetId) -> Option<&str> {
		self.reserve(chain_asset_id).map(|reserve| reserve.chain_id.as_str())
	}

	pub fn instructions(&self, key: &str) -> Option<&[String]> {
		self.instructions.get(key).map(Vec::as_slice)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;
	use serde_json::json;

	fn transfers() -> XcmTransfers {
		serde_json::from_value(json!({
			"assetsLocation": {
				"DOT": {
					"chainId": "polkadot",
					"multiLocation": {},
				},
				"USDT": {
					"chainId": "statemint",
					"reserveFee": {
						"mode": { "type": "proportional", "value": "1000" },
						"instructions": "xtokensReserve",
					},
					"multiLocation": { "parachainId": 1000, "palletInstance": 50, "generalIndex": 1984 },
				},
			},
			"instructions": {
				"xtokensDest": ["ReserveAssetDeposited", "ClearOrigin", "BuyExecution", "DepositAsset"],
				"xtokensReserve": ["WithdrawAsset", "ClearOrigin", "BuyExecution", "DepositReserveAsset"],
			},
			"chains": [{
				"chainId": "moonbeam",
				"assets": [
					{
						"assetId": 0,
						"assetLocation": "USDT",
						"assetLocationPath": { "type": "absolute" },
						"xcmTransfers": [{
							"type": "xtokens",
							"destination": {
								"chainId": "polkadot",
								"assetId": 0,
								"fee": { "mode": { "type": "standard" }, "instructions": "xtokensDest" },
							},
						}],
					},
					{
						"assetId": 1,
						"assetLocation": "DOT",
						"assetLocationPath": { "type": "concrete", "path": { "parents": 1 } },
						"xcmTransfers": [{
							"type": "bridge",
							"destination": {
								"chainId": "kusama",
								"assetId": 0,
								"fee": { "mode": { "type": "standard" }, "instructions": "xtokensDest" },
							},
						}],
					},
				],
			}],
		}))
		.unwrap()
	}

	#[test]
	fn lookups_resolve_through_asset_location() {
		let transfers = transfers();
		let usdt = ChainAssetId::new("moonbeam", 0);

		let transfer = transfers.transfer(&usdt, "polkadot").unwrap();
		assert_eq!(transfer.transfer_type, TransferType::Xtokens);
		assert_eq!(transfer.destination.fee.instructions, "xtokensDest");
		assert!(transfers.transfer(&usdt, "kusama").is_none());

		let reserve = transfers.reserve_path(&usdt).unwrap();
		assert_eq!(reserve.location_type, LocationType::Absolute);
		assert_eq!(reserve.path.parachain_id, Some(1000));
		assert_eq!(reserve.path.general_index.as_deref(), Some("1984"));

		assert_eq!(transfers.reserve_chain_id(&usdt), Some("statemint"));
		assert_eq!(transfers.reserve_fee(&usdt).unwrap().mode.mode_type, FeeModeType::Proportional);
		assert_eq!(transfers.instructions("xtokensReserve").unwrap().len(), 4);
		assert!(transfers.instructions("missing").is_none());
	}

	#[test]
	fn concrete_paths_belong_to_the_asset() {
		let transfers = transfers();
		let dot = ChainAssetId::new("moonbeam", 1);

		let reserve = transfers.reserve_path(&dot).unwrap();
		assert_eq!(reserve.location_type, LocationType::Concrete);
		assert_eq!(reserve.path, XcmAssetPath { parents: Some(1), ..Default::default() });
		assert!(transfers.reserve_fee(&dot).is_none());
		assert_eq!(
			transfers.transfer(&dot, "kusama").unwrap().transfer_type,
			TransferType::Unknown
		);
	}

	#[test]
	fn unknown_assets_have_nothing_configured() {
		let transfers = transfers();
		let unknown = ChainAssetId::new("acala", 0);
		assert!(transfers.transfer(&unknown, "polkadot").is_none());
		assert!(transfers.reserve_path(&unknown).is_none());
		assert!(transfers.reserve_chain_id(&unknown).is_none());
	}

	#[test]
	fn general_index_wider_than_u64_must_be_quoted() {
		let path: XcmAssetPath =
			serde_json::from_str(r#"{ "generalIndex": "340282366920938463463374607431768211455" }"#).unwrap();
		assert_eq!(path.general_index, Some(u128::MAX.to_string()));

		let path: XcmAssetPath = serde_json::from_str(r#"{ "generalIndex": 18446744073709551615 }"#).unwrap();
		assert_eq!(path.general_index, Some(u64::MAX.to_string()));

		assert!(serde_json::from_str::<XcmAssetPath>(r#"{ "generalIndex": 18446744073709551616 }"#).is_err());
		assert!(serde_json::from_str::<XcmAssetPath>(r#"{ "generalIndex": -1 }"#).is_err());
		assert!(serde_json::from_str::<XcmAssetPath>(r#"{ "generalIndex": 1.5 }"#).is_err());

		let path: XcmAssetPath = serde_json::from_str(r#"{ "generalIndex": null }"#).unwrap();
		assert_eq!(path.general_index, None);
	}

	#[test]
	fn malformed_documents_are_rejected() {
		assert_matches!(XcmTransfers::from_json("{\"chains\": 1}"), Err(Error::InvalidConfig(_)));
	}
}
