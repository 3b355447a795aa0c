//! Integration tests for decoding mappings from configuration sources.
//!
//! Uses `figment::Jail` so environment variables and files stay isolated.
use anyhow::{Result, anyhow, ensure};
use dotpath::{AccessorOptions, DotpathError, Mapping, Value, get, merge};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use rstest::rstest;
use test_helpers::figment::{jail_error, with_jail};

#[test]
fn json_documents_decode_into_mappings() -> Result<()> {
    let tree = Mapping::from_json_str(r#"{"a": {"b": [true, null]}}"#)?;
    ensure!(get(&tree, "a.b.0") == Some(&Value::Bool(true)));
    ensure!(get(&tree, "a.b.1") == Some(&Value::Null));
    Ok(())
}

#[rstest]
#[case::scalar_root("42")]
#[case::truncated(r#"{"a": "#)]
fn malformed_json_is_a_decode_error(#[case] data: &str) -> Result<()> {
    let err = Mapping::from_json_str(data)
        .err()
        .ok_or_else(|| anyhow!("expected decoding to fail"))?;
    ensure!(
        matches!(err.as_ref(), DotpathError::Decode { .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[cfg(feature = "toml")]
#[test]
fn toml_documents_decode_into_mappings() -> Result<()> {
    let tree = Mapping::from_toml_str(
        r#"
        title = "demo"

        [server]
        port = 8080
        hosts = ["a", "b"]
        "#,
    )?;
    ensure!(get(&tree, "server.port") == Some(&Value::Int(8080)));
    ensure!(get(&tree, "server.hosts.1") == Some(&Value::from("b")));
    Ok(())
}

#[test]
fn providers_combine_files_and_environment() -> Result<()> {
    let tree = with_jail(|j| {
        j.create_file(
            "config.toml",
            r#"
            [db]
            host = "file-host"
            port = 5432
            "#,
        )?;
        j.set_env("APP_DB__HOST", "env-host");
        let figment = Figment::from(Toml::file("config.toml"))
            .merge(Env::prefixed("APP_").split("__"));
        Mapping::from_provider(figment).map_err(|e| jail_error(&e))
    })?;
    ensure!(get(&tree, "db.host") == Some(&Value::from("env-host")));
    ensure!(get(&tree, "db.port") == Some(&Value::Int(5432)));
    Ok(())
}

#[test]
fn decoded_layers_merge() -> Result<()> {
    let defaults = Mapping::from_provider(Serialized::defaults(serde_json::json!({
        "log": {"level": "info", "targets": ["stdout"]},
    })))?;
    let overrides = Mapping::from_json_str(r#"{"log": {"targets": ["file"]}}"#)?;
    let merged = merge([Value::from(defaults), Value::from(overrides)])?;
    ensure!(get(&merged, "log.level") == Some(&Value::from("info")));
    ensure!(get(&merged, "log.targets.1") == Some(&Value::from("file")));
    Ok(())
}

#[test]
fn accessor_options_load_from_configuration() -> Result<()> {
    let accessor = with_jail(|j| {
        j.create_file("paths.toml", r#"delimiter = "/""#)?;
        AccessorOptions::from_provider(Toml::file("paths.toml"))
            .and_then(AccessorOptions::build)
            .map_err(|e| jail_error(&e))
    })?;
    ensure!(accessor.delimiter() == "/");

    let defaulted = AccessorOptions::from_provider(Toml::string(""))?;
    ensure!(defaulted == AccessorOptions::default());
    Ok(())
}

#[test]
fn empty_configured_delimiter_is_rejected() -> Result<()> {
    let err = AccessorOptions::from_provider(Toml::string(r#"delimiter = """#))?
        .build()
        .err()
        .ok_or_else(|| anyhow!("expected empty delimiter to be rejected"))?;
    ensure!(matches!(err.as_ref(), DotpathError::EmptyDelimiter));
    Ok(())
}
