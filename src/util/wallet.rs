//! EIP-1193 wallet-provider interop.
//!
//! Talks to the `window.ethereum` object injected by browser wallet
//! extensions. Everything here is best-effort: a missing extension or a
//! rejected prompt surfaces as an error string for the login page to show.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Prompt the wallet for account access and return the first account.
///
/// # Errors
///
/// Returns an error string when no wallet extension is present, the user
/// rejects the prompt, or the provider returns no accounts.
pub async fn connect() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let accounts = provider_request("eth_requestAccounts", &js_sys::Array::new()).await?;
        let list: js_sys::Array = accounts
            .dyn_into()
            .map_err(|_| "wallet returned no account list".to_owned())?;
        list.get(0)
            .as_string()
            .filter(|address| !address.is_empty())
            .ok_or_else(|| "wallet returned no accounts".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Ask the wallet to `personal_sign` `message` with `address`.
///
/// # Errors
///
/// Returns an error string when the provider is missing or the user rejects
/// the signing prompt.
pub async fn sign_message(address: &str, message: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = js_sys::Array::new();
        params.push(&JsValue::from_str(message));
        params.push(&JsValue::from_str(address));
        provider_request("personal_sign", &params)
            .await?
            .as_string()
            .ok_or_else(|| "wallet returned an empty signature".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (address, message);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn provider_request(method: &str, params: &js_sys::Array) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let provider = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(|| "no wallet extension detected".to_owned())?;
    let request = js_sys::Reflect::get(&provider, &JsValue::from_str("request"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| "wallet provider has no request method".to_owned())?;

    let args = js_sys::Object::new();
    js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
        .map_err(|_| "failed to build wallet request".to_owned())?;
    js_sys::Reflect::set(&args, &JsValue::from_str("params"), params)
        .map_err(|_| "failed to build wallet request".to_owned())?;

    let promise: js_sys::Promise = request
        .call1(&provider, &args)
        .map_err(rejection_message)?
        .dyn_into()
        .map_err(|_| "wallet request did not return a promise".to_owned())?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(rejection_message)
}

#[cfg(feature = "hydrate")]
fn rejection_message(err: JsValue) -> String {
    js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| "wallet request rejected".to_owned())
}
