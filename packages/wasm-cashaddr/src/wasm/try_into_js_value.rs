use crate::address::{AddressPayload, AddressType};
use wasm_bindgen::{JsError, JsValue};

pub(crate) trait TryIntoJsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsError>;
}

macro_rules! js_obj {
    ( $( $key:expr => $value:expr ),* ) => {{
        let obj = js_sys::Object::new();
        $(
            js_sys::Reflect::set(&obj, &$key.into(), &$value.try_to_js_value()?.into())
                .map_err(|_| JsError::new("Failed to set object property"))?;
        )*
        Ok(Into::<JsValue>::into(obj)) as Result<JsValue, JsError>
    }};
}

impl TryIntoJsValue for u8 {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from(*self))
    }
}

impl TryIntoJsValue for [u8] {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(js_sys::Uint8Array::from(self).into())
    }
}

impl TryIntoJsValue for AddressType {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self.as_str()))
    }
}

impl TryIntoJsValue for AddressPayload {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        js_obj!(
            "addressType" => self.address_type(),
            "version" => self.version,
            "hash" => self.hash[..]
        )
    }
}
