//! Property tests for the loaders.

use std::path::PathBuf;

use proptest::prelude::*;
use tandem_config::{
    BuildDescriptor, BuildSource, ConfigError, EsTarget, Loader, RuntimeSettings, SchemaValidator,
    SettingsSource,
};

fn settings(protocol: &str, ports: [i64; 4]) -> SettingsSource {
    SettingsSource {
        debug: false,
        protocol: protocol.to_string(),
        host: "localhost".to_string(),
        ports: tandem_config::PortsSource::Ordered(ports),
        start_page: PathBuf::from("src/index.html"),
        error_page: PathBuf::from("src/other/404.html"),
        cert_path: None,
        key_path: None,
        backend_production: None,
    }
}

fn target() -> impl Strategy<Value = EsTarget> {
    prop_oneof![
        Just(EsTarget::Es5),
        Just(EsTarget::Es2015),
        Just(EsTarget::Es2020),
        Just(EsTarget::EsNext),
    ]
}

fn loader() -> impl Strategy<Value = Loader> {
    prop_oneof![
        Just(Loader::Text),
        Just(Loader::File),
        Just(Loader::DataUrl),
        Just(Loader::Json),
    ]
}

proptest! {
    #[test]
    fn equal_ports_always_fail(
        ports in prop::array::uniform4(1i64..=65535),
        i in 0usize..4,
        j in 0usize..4,
    ) {
        prop_assume!(i != j);
        let mut ports = ports;
        ports[j] = ports[i];

        let err = RuntimeSettings::load_with(&settings("http", ports), &SchemaValidator).unwrap_err();
        let is_collision = matches!(err, ConfigError::PortCollision { .. });
        prop_assert!(is_collision);
    }

    #[test]
    fn distinct_ports_in_range_load_in_role_order(
        ports in prop::collection::hash_set(1u16..=65535, 4),
    ) {
        let ports: Vec<u16> = ports.into_iter().collect();
        let raw = [ports[0], ports[1], ports[2], ports[3]].map(i64::from);

        let settings = RuntimeSettings::load_with(&settings("http", raw), &SchemaValidator).unwrap();
        prop_assert_eq!(settings.ports().as_array().map(i64::from), raw);
    }

    #[test]
    fn https_with_any_missing_tls_path_fails(
        cert in prop::option::of(prop_oneof![Just(String::new()), Just("cert.pem".to_string())]),
        key in prop::option::of(prop_oneof![Just(String::new()), Just("key.pem".to_string())]),
    ) {
        let complete = cert.as_deref() == Some("cert.pem") && key.as_deref() == Some("key.pem");
        prop_assume!(!complete);

        let mut source = settings("https", [8000, 5000, 7000, 7001]);
        source.cert_path = cert.map(PathBuf::from);
        source.key_path = key.map(PathBuf::from);

        let err = RuntimeSettings::load_with(&source, &SchemaValidator).unwrap_err();
        let is_missing_tls = matches!(err, ConfigError::MissingTlsMaterial { .. });
        prop_assert!(is_missing_tls);
    }

    #[test]
    fn descriptor_is_identity_of_its_source(
        entries in prop::collection::vec("[a-z]{1,8}\\.js", 1..4),
        bundle in any::<bool>(),
        minify in any::<bool>(),
        sourcemap in any::<bool>(),
        target in target(),
        rules in prop::collection::vec(("[a-z]{1,5}", loader()), 0..4),
    ) {
        let mut source = BuildSource::new(&entries[0], "dist/out.js");
        source.entry_points = entries.iter().map(PathBuf::from).collect();
        source.bundle = bundle;
        source.minify = minify;
        source.sourcemap = sourcemap;
        source.target = target;
        for (ext, loader) in rules {
            source.loaders.insert(format!(".{ext}"), loader);
        }

        let first = BuildDescriptor::load_with(&source, &SchemaValidator).unwrap();
        let second = BuildDescriptor::load_with(&source, &SchemaValidator).unwrap();
        prop_assert_eq!(first.to_source(), source);
        prop_assert_eq!(first, second);
    }
}
