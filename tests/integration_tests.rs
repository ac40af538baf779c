//! Integration tests for the `enchant` CLI, driven through clap parsing and `execute`.

use clap::Parser;
use enchant::cli::lookup::{self, LookupError};
use enchant::cli::{Cli, ExitCode, execute};
use enchant::{OutputFormat, RenderConfig, render_list, render_record};
use enchant_core::{ENCHANTMENTS, EnchantmentType};

/// Helper to parse and run a command line
fn run(args: &[&str]) -> Result<ExitCode, (ExitCode, String)> {
    let mut argv = vec!["enchant"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("argument parsing failed");
    execute(cli).map_err(|e| (e.exit_code, e.message))
}

#[test]
fn test_every_record_resolves_through_cli() {
    for info in ENCHANTMENTS {
        let id = info.id.to_string();
        assert_eq!(run(&["id", id.as_str()]), Ok(ExitCode::SUCCESS), "id {id}");
        assert_eq!(run(&[id.as_str()]), Ok(ExitCode::SUCCESS), "query {id}");
        for &alias in info.aliases {
            let upper = alias.to_uppercase();
            assert_eq!(run(&["lookup", alias]), Ok(ExitCode::SUCCESS), "alias {alias}");
            assert_eq!(run(&["lookup", upper.as_str()]), Ok(ExitCode::SUCCESS), "alias {upper}");
        }
    }
}

#[test]
fn test_unknown_inputs_exit_with_failure() {
    for args in [
        &["id", "9"][..],
        &["id", "36"][..],
        &["id", "-1"][..],
        &["lookup", "not-a-real-alias"][..],
        &["not-a-real-alias"][..],
    ] {
        let (code, message) = run(args).unwrap_err();
        assert_eq!(code, ExitCode::FAILURE, "{args:?}");
        assert!(message.contains("unknown enchantment"), "{args:?}: {message}");
    }
}

#[test]
fn test_list_formats_succeed() {
    for format in ["plain", "table", "json"] {
        assert_eq!(run(&["list", "--format", format]), Ok(ExitCode::SUCCESS));
        assert_eq!(
            run(&["list", "--format", format, "--no-aliases"]),
            Ok(ExitCode::SUCCESS)
        );
    }
}

#[test]
fn test_reference_and_check_succeed() {
    assert_eq!(run(&["reference"]), Ok(ExitCode::SUCCESS));
    assert_eq!(run(&["check"]), Ok(ExitCode::SUCCESS));
}

#[test]
fn test_documented_scenarios_through_lookup_layer() {
    let sharp = lookup::find("sharpness").unwrap();
    assert_eq!((sharp.id, sharp.name), (16, "Sharpness"));
    assert_eq!(lookup::find("SHARP").unwrap(), sharp);

    let fire = lookup::find("fireprotection").unwrap();
    assert_eq!((fire.id, fire.name), (1, "Fire protection"));
    assert_eq!(lookup::find("flameprotection").unwrap(), fire);

    assert_eq!(lookup::find("35").unwrap().name, "Fortune");
    assert!(matches!(lookup::find("36"), Err(LookupError::UnknownId { id: 36, .. })));
}

#[test]
fn test_full_plain_listing_has_one_line_per_record() {
    let out = render_list(ENCHANTMENTS, &RenderConfig::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), ENCHANTMENTS.len());
    assert_eq!(lines[0], "0 Protection (protection)");
    assert_eq!(lines[lines.len() - 1], "62 Lure (lure, rodlure)");
}

#[test]
fn test_full_table_listing_has_header() {
    let config = RenderConfig::new().with_format(OutputFormat::Table);
    let out = render_list(ENCHANTMENTS, &config);
    assert_eq!(out.lines().count(), ENCHANTMENTS.len() + 1);
    assert!(out.starts_with("ID  NAME"));
    assert!(out.contains("\n 0  Protection "));
}

#[test]
fn test_record_json_round_trips_through_serde() {
    let config = RenderConfig::new().with_format(OutputFormat::Json);
    let out = render_record(EnchantmentType::ArrowInfinite.info(), &config);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["id"], 51);
    assert_eq!(value["aliases"].as_array().map(Vec::len), Some(5));
}
