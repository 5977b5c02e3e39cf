//! Unpadded base64url (RFC 4648 §5), the encoding of the `dns` parameter in
//! RFC 8484 GET requests.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
