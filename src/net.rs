use std::net::ToSocketAddrs;

/// Address of the machine we are running on, as reported to providers that
/// want the searching client's IP.
///
/// Looks up our own hostname and resolves it. When resolution fails the
/// bare hostname is returned instead, so callers still get a usable value;
/// `None` only when the hostname itself is unavailable. Resolved on every
/// call, never cached.
pub fn local_ip_address() -> Option<String> {
    let host = hostname::get().ok()?.into_string().ok()?;
    let resolved = (host.as_str(), 0)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next());
    Some(resolved.map_or(host, |addr| addr.ip().to_string()))
}
