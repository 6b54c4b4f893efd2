//! Typed API responses and their status contract.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A decoded API response.
///
/// Every response carries a numeric `RetCode` and an optional message; a
/// non-zero code is a semantic failure even though the HTTP exchange
/// succeeded. The client checks the code after decoding and turns failures
/// into [`crate::Error::BadRetCode`].
pub trait Response: DeserializeOwned {
    /// Remote status code; zero means success.
    fn ret_code(&self) -> i64;

    /// Remote-supplied message, empty when the server sent none.
    fn message(&self) -> &str;

    /// Action echoed by the server, when present in the body.
    fn action(&self) -> Option<&str> {
        None
    }
}

/// The status fields common to all responses.
///
/// Concrete response types flatten this into themselves:
///
/// ```
/// use serde::Deserialize;
/// use ucloud_api::{impl_response, ResponseHeader};
///
/// #[derive(Debug, Default, Deserialize)]
/// struct CreateUHostInstanceResponse {
///     #[serde(flatten)]
///     header: ResponseHeader,
///     #[serde(rename = "UHostIds", default)]
///     uhost_ids: Vec<String>,
/// }
///
/// impl_response!(CreateUHostInstanceResponse);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseHeader {
    /// Remote status code; zero means success.
    #[serde(rename = "RetCode", default)]
    pub ret_code: i64,
    /// Remote-supplied message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Action name echoed by the server, when it sends one.
    #[serde(rename = "Action", default)]
    pub action: Option<String>,
}

impl Response for ResponseHeader {
    fn ret_code(&self) -> i64 {
        self.ret_code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

/// Implement [`Response`] for types with a flattened `header:
/// ResponseHeader` field.
#[macro_export]
macro_rules! impl_response {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::Response for $ty {
            fn ret_code(&self) -> i64 {
                self.header.ret_code
            }

            fn message(&self) -> &str {
                &self.header.message
            }

            fn action(&self) -> Option<&str> {
                self.header.action.as_deref()
            }
        })+
    };
}
