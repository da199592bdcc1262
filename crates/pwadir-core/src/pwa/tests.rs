use super::*;
use crate::clock::FixedClock;
use serde_json::json;

const MANIFEST_URL: &str = "https://example.com/app/manifest.json";
const T0: i64 = 1_700_000_000_000;

fn pwa_with(raw: &str) -> Pwa {
    Pwa::with_clock(Some(MANIFEST_URL), raw, &FixedClock(T0))
}

fn empty_pwa(url: Option<&str>) -> Pwa {
    Pwa::with_clock(url, ManifestPayload::Empty, &FixedClock(T0))
}

#[test]
fn construction_strips_fragment() {
    let pwa = empty_pwa(Some("https://example.com/manifest.json#install"));
    assert_eq!(pwa.manifest_url(), Some("https://example.com/manifest.json"));
}

#[test]
fn construction_defaults() {
    let pwa = empty_pwa(Some(MANIFEST_URL));
    assert_eq!(pwa.created(), T0);
    assert_eq!(pwa.updated(), T0);
    assert!(pwa.visible());
    assert!(pwa.user().is_none());
    assert!(pwa.encoded_start_url().is_none());
    assert!(pwa.manifest().unwrap().is_none());
}

#[test]
fn construction_from_model_stores_raw() {
    let manifest = Manifest::new(Some(MANIFEST_URL), json!({"name": "Model"}));
    let pwa = Pwa::new(Some(MANIFEST_URL), &manifest);
    assert_eq!(pwa.manifest_as_string(), Some(r#"{"name":"Model"}"#));
    assert_eq!(pwa.name().unwrap(), "Model");
}

#[test]
fn raw_round_trip_is_identical() {
    let raw = "{\n  \"name\": \"Spaced\" ,\"short_name\":\"S\"\n}";
    let pwa = pwa_with(raw);
    assert_eq!(pwa.manifest_as_string(), Some(raw));
    assert_eq!(pwa.manifest().unwrap().unwrap().raw(), raw);
}

#[test]
fn is_new_until_updated_advances() {
    let mut pwa = empty_pwa(Some(MANIFEST_URL));
    assert!(pwa.is_new());
    pwa.set_updated(T0 + 1);
    assert!(!pwa.is_new());
    pwa.touch(&FixedClock(T0 + 5_000));
    assert_eq!(pwa.updated(), T0 + 5_000);
    assert!(!pwa.is_new());
}

#[test]
fn is_new_with_system_clock() {
    let pwa = Pwa::new(Some(MANIFEST_URL), ManifestPayload::Empty);
    assert!(pwa.is_new());
}

#[test]
fn names_default_to_empty() {
    let pwa = empty_pwa(Some(MANIFEST_URL));
    assert_eq!(pwa.name().unwrap(), "");
    assert_eq!(pwa.short_name().unwrap(), "");
    assert_eq!(pwa.start_url().unwrap(), "");
    assert_eq!(pwa.description().unwrap(), "");
}

#[test]
fn display_name_prefers_name() {
    let pwa = pwa_with(r#"{"name":"Full Name","short_name":"Short"}"#);
    assert_eq!(pwa.display_name().unwrap(), "Full Name");
}

#[test]
fn display_name_falls_back_to_short_name() {
    let pwa = pwa_with(r#"{"name":"","short_name":"Short"}"#);
    assert_eq!(pwa.display_name().unwrap(), "Short");
}

#[test]
fn display_name_falls_back_to_trimmed_url() {
    let pwa = empty_pwa(Some(MANIFEST_URL));
    assert_eq!(pwa.display_name().unwrap(), "example.com/app");

    let pwa = pwa_with(r#"{"description":"no names"}"#);
    assert_eq!(pwa.display_name().unwrap(), "example.com/app");
}

#[test]
fn display_name_without_url_is_empty() {
    let pwa = empty_pwa(None);
    assert_eq!(pwa.display_name().unwrap(), "");
}

#[test]
fn description_prefers_manifest() {
    let mut pwa = pwa_with(r#"{"description":"From manifest"}"#);
    pwa.set_meta_description(Some("From page".to_string()));
    assert_eq!(pwa.description().unwrap(), "From manifest");
}

#[test]
fn description_falls_back_to_meta() {
    let mut pwa = pwa_with(r#"{"description":""}"#);
    pwa.set_meta_description(Some("From page".to_string()));
    assert_eq!(pwa.description().unwrap(), "From page");
    assert_eq!(pwa.meta_description(), Some("From page"));
}

#[test]
fn background_color_default_and_override() {
    let pwa = empty_pwa(Some(MANIFEST_URL));
    assert_eq!(pwa.background_color().unwrap(), DEFAULT_BACKGROUND_COLOR);

    let pwa = pwa_with(r##"{"background_color":"#2196F3"}"##);
    assert_eq!(pwa.background_color().unwrap(), "#2196F3");
}

#[test]
fn absolute_start_url_strips_utm() {
    let pwa = Pwa::with_clock(
        Some("https://example.com/manifest.json"),
        r#"{"start_url":"/?utm_source=x&ref=y"}"#,
        &FixedClock(T0),
    );
    assert_eq!(pwa.absolute_start_url().unwrap(), "https://example.com/?ref=y");
}

#[test]
fn absolute_start_url_defaults_to_root() {
    let pwa = empty_pwa(Some(MANIFEST_URL));
    assert_eq!(pwa.absolute_start_url().unwrap(), "https://example.com/");
}

#[test]
fn absolute_start_url_relative_to_manifest_dir() {
    let pwa = pwa_with(r#"{"start_url":"index.html?UTM_Medium=a"}"#);
    assert_eq!(
        pwa.absolute_start_url().unwrap(),
        "https://example.com/app/index.html"
    );
}

#[test]
fn absolute_start_url_custom_prefixes() {
    let pwa = pwa_with(r#"{"start_url":"/?src=pwa&utm_source=x&q=1"}"#);
    assert_eq!(
        pwa.absolute_start_url_with(&["src", "utm_"]).unwrap(),
        "https://example.com/?q=1"
    );
}

#[test]
fn absolute_start_url_without_manifest_url_is_empty() {
    let pwa = Pwa::with_clock(None, r#"{"start_url":"/start"}"#, &FixedClock(T0));
    assert_eq!(pwa.absolute_start_url().unwrap(), "");
}

#[test]
fn malformed_manifest_url_is_error() {
    let pwa = empty_pwa(Some("not a url"));
    assert!(matches!(
        pwa.absolute_start_url(),
        Err(PwaError::InvalidUrl { .. })
    ));
}

#[test]
fn malformed_manifest_json_is_error() {
    let pwa = pwa_with("{\"name\": ");
    assert!(matches!(pwa.manifest(), Err(PwaError::InvalidManifest(_))));
    assert!(matches!(pwa.name(), Err(PwaError::InvalidManifest(_))));
    assert!(matches!(pwa.display_name(), Err(PwaError::InvalidManifest(_))));
    assert!(matches!(pwa.background_color(), Err(PwaError::InvalidManifest(_))));
    assert_eq!(pwa.manifest_as_string(), Some("{\"name\": "));
}

#[test]
fn manifest_getter_carries_url() {
    let pwa = pwa_with(r#"{"name":"X"}"#);
    let manifest = pwa.manifest().unwrap().unwrap();
    assert_eq!(manifest.url(), Some(MANIFEST_URL));
    assert_eq!(manifest.name(), Some("X"));
}

#[test]
fn set_manifest_from_model_keeps_raw_only() {
    let mut pwa = empty_pwa(Some(MANIFEST_URL));
    let manifest = Manifest::parse(None, r#"{"name":"X"}"#).unwrap();
    pwa.set_manifest_from_model(&manifest);
    assert_eq!(pwa.manifest_as_string(), Some(r#"{"name":"X"}"#));
    assert_eq!(pwa.name().unwrap(), "X");
}

#[test]
fn set_manifest_accepts_both_forms() {
    let mut pwa = empty_pwa(Some(MANIFEST_URL));
    pwa.set_manifest(r#"{"short_name":"Raw"}"#);
    assert_eq!(pwa.short_name().unwrap(), "Raw");

    pwa.set_manifest(Manifest::new(None, json!({"short_name": "Model"})));
    assert_eq!(pwa.manifest_as_string(), Some(r#"{"short_name":"Model"}"#));

    pwa.set_manifest(ManifestPayload::Empty);
    assert_eq!(pwa.manifest_as_string(), None);

    pwa.set_manifest_raw(Some(r#"{"name":"Direct"}"#.to_string()));
    assert_eq!(pwa.name().unwrap(), "Direct");
    pwa.set_manifest_raw(None);
    assert!(pwa.manifest().unwrap().is_none());
}

#[test]
fn empty_raw_manifest_reads_as_absent() {
    let pwa = pwa_with("");
    assert!(pwa.manifest().unwrap().is_none());
    assert_eq!(pwa.background_color().unwrap(), DEFAULT_BACKGROUND_COLOR);
}

#[test]
fn set_user_wraps_descriptor() {
    let mut pwa = empty_pwa(Some(MANIFEST_URL));
    pwa.set_user(json!({"id": "42", "email": "dev@example.com"}));
    assert_eq!(pwa.user().and_then(User::id), Some("42"));
}

#[test]
fn generate_encoded_start_url_caches_host_and_path() {
    let mut pwa = pwa_with(r#"{"start_url":"./?utm_source=homescreen"}"#);
    assert_eq!(pwa.generate_encoded_start_url().unwrap(), "example.com%2Fapp%2F");
    assert_eq!(pwa.encoded_start_url(), Some("example.com%2Fapp%2F"));
}

#[test]
fn generate_encoded_start_url_recomputes() {
    let mut pwa = pwa_with(r#"{"start_url":"/one"}"#);
    assert_eq!(pwa.generate_encoded_start_url().unwrap(), "example.com%2Fone");
    pwa.set_manifest(r#"{"start_url":"/two?x=1"}"#);
    assert_eq!(pwa.generate_encoded_start_url().unwrap(), "example.com%2Ftwo");
    assert_eq!(pwa.encoded_start_url(), Some("example.com%2Ftwo"));
}

#[test]
fn generate_encoded_start_url_needs_manifest_url() {
    let mut pwa = empty_pwa(None);
    assert!(matches!(
        pwa.generate_encoded_start_url(),
        Err(PwaError::MissingManifestUrl)
    ));
    assert!(pwa.encoded_start_url().is_none());
}

#[test]
fn serde_keeps_manifest_as_string() {
    let mut pwa = pwa_with(r#"{"name":"Stored"}"#);
    pwa.set_user(json!({"id": "u1"}));
    let json = serde_json::to_value(&pwa).unwrap();
    assert_eq!(json["manifest_raw"], r#"{"name":"Stored"}"#);
    assert_eq!(json["created"], T0);
    assert_eq!(json["user"]["id"], "u1");

    let back: Pwa = serde_json::from_value(json).unwrap();
    assert_eq!(back, pwa);
    assert!(back.is_new());
}
