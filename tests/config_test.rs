use move_bcs::commands;
use move_bcs::{Config, OutputConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("move-bcs.toml");

    let mut config = Config::default();
    config.log.level = "debug".to_string();
    config.output.uppercase_hex = true;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_rejects_unknown_level() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "[log]\nlevel = \"chatty\"\n").unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_missing_config_path_uses_defaults() {
    assert_eq!(Config::load(None).unwrap(), Config::default());

    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");
    assert!(Config::load(Some(missing.as_path())).is_err());
}

#[test]
fn test_output_config_drives_encoding() {
    let output = OutputConfig {
        uppercase_hex: true,
        hex_prefix: false,
    };
    let hex = commands::encode_value("177279138216529409561387389144142902470", &output).unwrap();
    assert_eq!(hex, format!("C6F43E37DC655479B6A7653457B85E85{}", "00".repeat(16)));
    assert_eq!(
        commands::decode_value(&hex).unwrap(),
        "177279138216529409561387389144142902470"
    );
}

#[test]
fn test_sequence_commands() {
    let output = OutputConfig::default();
    let values = vec!["16".to_string(), "17".to_string()];
    let hex = commands::encode_sequence(&values, &output).unwrap();
    assert!(hex.starts_with("0x0210"));
    assert_eq!(hex.len(), 2 + 2 * (1 + 64));
    assert_eq!(commands::decode_sequence(&hex).unwrap(), values);
}
