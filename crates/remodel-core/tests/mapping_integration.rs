//! End-to-end mapping scenarios through the public API


use remodel_core::{fields, mapping, Error, Mappable, Mapper};
use serde_json::json;
use test_support::{Article, Visibility};

#[test]
fn test_full_document_from_text() {
    let text = test_support::sample_article_json().to_string();
    let article = Article::from_json(&text).unwrap();
    assert_eq!(article, test_support::sample_article());
}

#[test]
fn test_partial_payload_keeps_defaults_elsewhere() {
    let article = Article::from_json(r#"{"id": "7", "visibility": "private"}"#).unwrap();
    assert_eq!(article.id, 7, "numeric string coerces");
    assert_eq!(article.visibility, Visibility::Private);
    assert_eq!(article.title, "");
    assert_eq!(article.published_at, None);
    assert!(article.tags.is_empty());
}

#[test]
fn test_designated_path_extraction() {
    let doc = json!({
        "response": {"article": test_support::sample_article_json()},
    })
    .to_string();

    let article = Article::from_json_at(&doc, "response.article").unwrap();
    assert_eq!(article.id, 42);

    let err = Article::from_json_at(&doc, "response.missing").unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
}

#[test]
fn test_to_json_string_and_back() {
    let article = test_support::sample_article();
    let compact = article.to_json_string(false).unwrap();
    assert_eq!(Article::from_json(&compact).unwrap(), article);

    let pretty = article.to_json_string(true).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(Article::from_json(&pretty).unwrap(), article);
}

#[test]
fn test_batch_from_text_degrades_per_element() {
    let text = json!([
        test_support::sample_article_json(),
        {"id": "not numeric"},
        "garbage",
    ])
    .to_string();

    let batch: Vec<Option<Article>> = mapping::vec_from_str(&text).unwrap();
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[0].as_ref().unwrap().id, 42);
    assert!(batch[1].is_none());
    assert!(batch[2].is_none());
}

#[test]
fn test_slice_serialization() {
    let articles = vec![test_support::sample_article(), Article::default()];
    let out = mapping::slice_to_value(&articles);
    let array = out.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], json!(42));

    let reparsed: Vec<Option<Article>> = mapping::vec_from_value(&out).unwrap();
    assert_eq!(reparsed[0].as_ref().unwrap(), &articles[0]);
}

#[test]
fn test_optional_date_handles_null_and_garbage() {
    let article = Article::from_json(r#"{"published_at": null}"#).unwrap();
    assert_eq!(article.published_at, None);

    let article = Article::from_json(r#"{"published_at": "yesterday"}"#).unwrap();
    assert_eq!(article.published_at, None, "bad date absorbed");
}

// A model wired the way a migration shim would be: legacy lookup paths,
// a custom wire format, and an internal field kept off the wire.
#[derive(Default, Clone, Debug, PartialEq)]
struct LegacyEvent {
    name: String,
    minutes: i64,
    cache_key: String,
}

fields!(LegacyEvent { name, minutes, cache_key });

impl Mappable for LegacyEvent {
    fn customize_mapping(&self, mapper: &mut Mapper) {
        mapper.bind("name").paths(["event_name", "detail.name"]);
        mapper
            .bind("minutes")
            .from_json(|v| v.as_i64().map(|seconds| seconds / 60))
            .to_json(|minutes: &i64| Some(json!(minutes * 60)));
        mapper.exclude("cache_key");
    }

    fn after_mapping(&mut self) {
        self.cache_key = format!("{}#{}", self.name, self.minutes);
    }
}

#[test]
fn test_customized_model_end_to_end() {
    let event =
        LegacyEvent::from_json(r#"{"detail": {"name": "sync"}, "minutes": 180}"#).unwrap();
    assert_eq!(event.name, "sync");
    assert_eq!(event.minutes, 3, "custom closure converts seconds to minutes");
    assert_eq!(event.cache_key, "sync#3", "after_mapping derives internal state");

    let out = event.to_json();
    // The first path's final segment names the output key; the custom
    // serializer restores seconds; the excluded field stays internal.
    assert_eq!(out, json!({"event_name": "sync", "minutes": 180}));
}

#[test]
fn test_update_in_place_from_partial_response() {
    let mut event =
        LegacyEvent::from_json(r#"{"event_name": "sync", "minutes": 120}"#).unwrap();
    mapping::update_from_value(&mut event, &json!({"minutes": 240})).unwrap();
    assert_eq!(event.minutes, 4);
    assert_eq!(event.name, "sync", "fields absent from the update are untouched");
}

#[test]
fn test_trace_reports_absorbed_fields() {
    let (article, trace) = mapping::from_value_traced::<Article>(&json!({
        "id": 42,
        "title": 3.5,
        "published_at": "not a date",
    }))
    .unwrap();
    assert_eq!(article.id, 42);
    assert_eq!(article.title, "3.5", "numbers stringify into string fields");
    assert!(!trace.is_clean());
    assert!(trace.has_conversion_failures());
    assert!(trace
        .misses()
        .iter()
        .any(|miss| miss.field == "published_at"));
}
