use rs_distiller::{extract, ExtractResult, ImageData};

#[test]
fn result_serializes_with_stable_field_names() {
    let result = ExtractResult {
        content_text: "Body text\n".to_string(),
        title: Some("Headline".to_string()),
        lead_image: None,
        images: vec![ImageData {
            src: "https://example.com/a.jpg".to_string(),
            width: 640,
            height: 400,
            is_lead: true,
            ..ImageData::default()
        }],
        word_count: 2,
        block_count: 1,
        warnings: Vec::new(),
    };

    match serde_json::to_value(&result) {
        Ok(json) => {
            assert_eq!(json["content_text"], "Body text\n");
            assert_eq!(json["title"], "Headline");
            assert!(json["lead_image"].is_null());
            assert_eq!(json["images"][0]["width"], 640);
            assert_eq!(json["images"][0]["is_lead"], true);
            assert!(json["images"][0]["caption"].is_null());
            assert_eq!(json["word_count"], 2);
            assert_eq!(json["warnings"].as_array().map(Vec::len), Some(0));
        }
        Err(err) => panic!("serialization failed: {err}"),
    }
}

#[test]
fn image_data_round_trips() {
    let image = ImageData {
        src: "b.png".to_string(),
        alt: Some("Alt".to_string()),
        caption: Some("Caption".to_string()),
        width: 10,
        height: 20,
        is_lead: false,
    };
    let parsed = serde_json::to_string(&image)
        .and_then(|s| serde_json::from_str::<ImageData>(&s));
    assert!(parsed.is_ok_and(|p| p == image));
}

#[test]
fn extracted_result_serializes() {
    let html = "<html><body><p>One two three four five six seven eight nine ten eleven twelve \
                thirteen fourteen fifteen sixteen seventeen eighteen.</p></body></html>";

    match extract(html).map(|r| serde_json::to_string(&r)) {
        Ok(Ok(json)) => assert!(json.contains("\"content_text\":\"One two three")),
        Ok(Err(err)) => panic!("serialization failed: {err}"),
        Err(err) => panic!("extraction failed: {err}"),
    }
}
