//! Query-string parameter reader.
//!
//! Parameters are located by plain substring search on the decoded page
//! address, the same way the site's links are built (`?lang=es`,
//! `?section=menu_ide&lang=en`). Only the first occurrence is honoured and an
//! empty value counts as absent.

/// Characters `decodeURI` leaves escaped because they delimit URL components.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Read parameter `name` from `url`, falling back to `default`.
///
/// Returns the default when the parameter is missing or its decoded value is
/// empty.
pub fn get_param(url: &str, name: &str, default: &str) -> String {
    find_param(url, name).unwrap_or_else(|| default.to_string())
}

/// Read parameter `name` from `url`.
///
/// `?name=` is searched first, then `&name=`. The value runs up to the next
/// `&` or the end of the address and is percent-decoded. `None` when the
/// parameter is not present or the value is empty.
pub fn find_param(url: &str, name: &str) -> Option<String> {
    let url = decode_uri(url);

    let pos = url
        .find(&format!("?{}=", name))
        .or_else(|| url.find(&format!("&{}=", name)))?;

    // Skip the delimiter, the name and '='
    let arg = &url[pos + name.len() + 2..];
    let end = arg.find('&').unwrap_or(arg.len());

    let value = decode_uri_component(&arg[..end]);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Decode a full address, keeping escapes of reserved characters intact.
pub fn decode_uri(input: &str) -> String {
    percent_decode(input, true)
}

/// Decode every percent-escape in a single URL component.
pub fn decode_uri_component(input: &str) -> String {
    percent_decode(input, false)
}

fn percent_decode(input: &str, keep_reserved: bool) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                let decoded = (hi << 4) | lo;
                if keep_reserved && RESERVED.contains(&decoded) {
                    out.extend_from_slice(&bytes[i..i + 3]);
                } else {
                    out.push(decoded);
                }
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    // Escapes that do not form valid UTF-8 leave the input untouched
    String::from_utf8(out).unwrap_or_else(|_| input.to_string())
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
