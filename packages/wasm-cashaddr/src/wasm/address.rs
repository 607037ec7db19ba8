use crate::converter::{self, AddressFormat};
use crate::wasm::try_into_js_value::TryIntoJsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Resolve an optional format name, detecting the format when absent
fn parse_format(
    address: &str,
    format: Option<String>,
) -> std::result::Result<AddressFormat, JsValue> {
    match format.as_deref() {
        None | Some("") => AddressFormat::detect(address).map_err(to_js_error),
        Some(name) => name.parse().map_err(to_js_error),
    }
}

#[wasm_bindgen]
pub struct AddressConverterNamespace;

#[wasm_bindgen]
impl AddressConverterNamespace {
    #[wasm_bindgen(js_name = legacyToECash)]
    pub fn legacy_to_ecash(address: &str) -> std::result::Result<String, JsValue> {
        converter::legacy_to_ecash(address).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = legacyToBitcoinCash)]
    pub fn legacy_to_bitcoin_cash(address: &str) -> std::result::Result<String, JsValue> {
        converter::legacy_to_bitcoin_cash(address).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = eCashToLegacy)]
    pub fn ecash_to_legacy(address: &str) -> std::result::Result<String, JsValue> {
        converter::ecash_to_legacy(address).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = bitcoinCashToLegacy)]
    pub fn bitcoin_cash_to_legacy(address: &str) -> std::result::Result<String, JsValue> {
        converter::bitcoin_cash_to_legacy(address).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = eCashToBitcoinCash)]
    pub fn ecash_to_bitcoin_cash(address: &str) -> std::result::Result<String, JsValue> {
        converter::ecash_to_bitcoin_cash(address).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = bitcoinCashToECash)]
    pub fn bitcoin_cash_to_ecash(address: &str) -> std::result::Result<String, JsValue> {
        converter::bitcoin_cash_to_ecash(address).map_err(to_js_error)
    }

    /// Convert an address to another format
    ///
    /// # Arguments
    /// * `address` - The address string
    /// * `to` - Target format: "legacy", "ecash" or "bitcoincash"
    /// * `from` - Optional source format; detected from the address when omitted
    #[wasm_bindgen]
    pub fn convert(
        address: &str,
        to: &str,
        from: Option<String>,
    ) -> std::result::Result<String, JsValue> {
        let from = parse_format(address, from)?;
        let to: AddressFormat = to.parse().map_err(to_js_error)?;
        converter::convert(address, from, to).map_err(to_js_error)
    }

    /// Decode an address to `{ addressType, version, hash }`
    #[wasm_bindgen]
    pub fn decode(address: &str, format: Option<String>) -> std::result::Result<JsValue, JsValue> {
        let format = parse_format(address, format)?;
        let payload = converter::decode_address(address, format).map_err(to_js_error)?;
        payload.try_to_js_value().map_err(JsValue::from)
    }
}
