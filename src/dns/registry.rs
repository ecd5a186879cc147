//! Fixed public resolver registry.
//!
//! The six providers probed by dnshog, in stable display order. The
//! table is constant data defined at startup and never mutated.

use crate::dns::types::ResolverConfig;

/// Provider table: name plus (primary, secondary) nameserver addresses.
static PROVIDERS: &[(&str, [&str; 2])] = &[
    ("Cloudflare", ["1.1.1.1", "1.0.0.1"]),
    ("Google", ["8.8.8.8", "8.8.4.4"]),
    ("Quad9", ["9.9.9.9", "149.112.112.112"]),
    ("OpenDNS", ["208.67.222.222", "208.67.220.220"]),
    ("AdGuard", ["94.140.14.14", "94.140.15.15"]),
    ("SafeServe", ["198.54.117.10", "198.54.117.11"]),
];

/// Return the registered resolver configurations in display order.
#[must_use]
pub fn resolvers() -> Vec<ResolverConfig> {
    PROVIDERS
        .iter()
        .map(|(name, addresses)| ResolverConfig::new(*name, *addresses))
        .collect()
}

/// Number of registered providers.
#[must_use]
pub fn len() -> usize {
    PROVIDERS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::net::IpAddr;

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = resolvers().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["Cloudflare", "Google", "Quad9", "OpenDNS", "AdGuard", "SafeServe"]
        );
    }

    #[test]
    fn test_registry_names_unique() {
        let configs = resolvers();
        let names: HashSet<_> = configs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), configs.len());
        assert_eq!(configs.len(), 6);
        assert_eq!(len(), 6);
    }

    #[test]
    fn test_registry_addresses_valid() {
        for config in resolvers() {
            assert!(!config.addresses[0].is_empty());
            assert!(!config.addresses[1].is_empty());
            let addrs = config.ip_addrs().unwrap();
            for addr in addrs {
                assert!(matches!(addr, IpAddr::V4(_)), "{} is not IPv4", addr);
            }
        }
    }
}
