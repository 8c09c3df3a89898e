//! Loading configuration from disk.

use std::io::Write;

use vdxf::{Identifier, RootChain, Vdxf, VdxfConfig, VdxfError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_default_root_from_file() {
    init_tracing();
    let file = write_config(r#"{ "root_chain": { "name": "VRSC" } }"#);

    let config = VdxfConfig::from_file(file.path()).unwrap();
    let vdxf = Vdxf::new(config).unwrap();
    assert_eq!(vdxf.root_chain(), &RootChain::default());
}

#[test]
fn load_explicit_root_id() {
    init_tracing();
    let id = "ab".repeat(20);
    let file = write_config(&format!(
        r#"{{ "root_chain": {{ "name": "testnet", "id": "{id}" }}, "display_filter": true }}"#
    ));

    let vdxf = Vdxf::new(VdxfConfig::from_file(file.path()).unwrap()).unwrap();
    assert_eq!(vdxf.root_chain().name(), "testnet");
    assert_eq!(vdxf.root_chain().id(), Identifier::from_bytes([0xab; 20]));
    assert!(vdxf.config().display_filter);

    // The configured root supplies the default data key namespace.
    let implicit = vdxf.get_data_key("balance", Identifier::NULL).unwrap();
    let explicit = vdxf
        .get_data_key("balance", Identifier::from_bytes([0xab; 20]))
        .unwrap();
    assert_eq!(implicit, explicit);

    // And the display filter rejects control characters.
    assert!(vdxf.get_id("a\tb").is_err());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        VdxfConfig::from_file(&missing),
        Err(VdxfError::Io(_))
    ));
}

#[test]
fn malformed_file_is_json_error() {
    let file = write_config("root_chain = 'VRSC'");
    assert!(matches!(
        VdxfConfig::from_file(file.path()),
        Err(VdxfError::Json(_))
    ));
}

#[test]
fn bad_root_id_is_config_error() {
    let file = write_config(r#"{ "root_chain": { "name": "x", "id": "1234" } }"#);
    let config = VdxfConfig::from_file(file.path()).unwrap();
    assert!(matches!(Vdxf::new(config), Err(VdxfError::Config(_))));
}
