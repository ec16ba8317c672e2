use fiberlens::{extract, Confidence, Error, Source};

#[test]
fn structured_material_field_wins_with_high_confidence() {
    let html = r#"
        <html>
          <head>
            <script type="application/ld+json">
            {"@type": "Product", "name": "Stretch Tee", "material": "95% Cotton, 5% Spandex"}
            </script>
          </head>
          <body>
            <p>Our best-selling tee, now back in six colors.</p>
          </body>
        </html>
    "#;

    let result = extract(html);
    match result {
        Ok(result) => {
            assert_eq!(result.materials.as_deref(), Some("95% Cotton, 5% Spandex"));
            assert_eq!(result.confidence, Confidence::High);
            assert_eq!(result.source, Source::Jsonld);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn labeled_list_item_wins_without_structured_data() {
    let html = r#"
        <html>
          <body>
            <ul>
              <li>Relaxed fit</li>
              <li>Fabric: 100% Merino Wool</li>
              <li>Machine wash cold</li>
            </ul>
          </body>
        </html>
    "#;

    let result = extract(html);
    match result {
        Ok(result) => {
            assert_eq!(result.materials.as_deref(), Some("Fabric: 100% Merino Wool"));
            assert_eq!(result.confidence, Confidence::High);
            assert_eq!(result.source, Source::DomLeaf);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn promotional_banner_alone_yields_nothing() {
    let html = r#"
        <html>
          <body>
            <div class="banner"><span>Save 20% on all wool coats!</span></div>
          </body>
        </html>
    "#;

    let result = extract(html);
    match result {
        Ok(result) => {
            assert_eq!(result.materials, None);
            assert_eq!(result.confidence, Confidence::None);
            assert_eq!(result.source, Source::None);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn marketing_paragraph_yields_the_phrase_not_the_blob() {
    // ~500 characters of prose around a single composition mention.
    let html = r#"
        <html>
          <body>
            <p>There are sweaters, and then there is this one. We spent two
            years chasing the right mill, the right spin, and the right hand
            feel before we landed on this cozy 60% cashmere blend that drapes
            like a second skin. Wear it over a collared shirt for the office,
            or with nothing underneath on slow weekend mornings. However you
            style it, it keeps its shape, resists pilling, and gets softer
            with every single wear. This is the knit you will be handing
            over to someone you love a decade from now.</p>
          </body>
        </html>
    "#;

    let result = extract(html);
    match result {
        Ok(result) => {
            assert_eq!(result.materials.as_deref(), Some("60% cashmere"));
            assert_eq!(result.confidence, Confidence::High);
            assert_eq!(result.source, Source::DomLeaf);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn structured_data_outranks_equivalent_dom_text() {
    let html = r#"
        <html>
          <head>
            <script type="application/ld+json">
            {"@type": "Product", "material": "80% Wool, 20% Nylon"}
            </script>
          </head>
          <body>
            <ul><li>Fabric: 80% Wool, 20% Nylon</li></ul>
          </body>
        </html>
    "#;

    let result = extract(html);
    match result {
        Ok(result) => {
            assert_eq!(result.source, Source::Jsonld);
            assert_eq!(result.materials.as_deref(), Some("80% Wool, 20% Nylon"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn joined_result_never_exceeds_the_hit_cap() {
    let html = r#"
        <html>
          <body>
            <ul>
              <li>Shell: 10% wool alpha</li>
              <li>Lining: 20% silk bravo</li>
              <li>Trim: 30% linen charlie</li>
              <li>Fill: 40% down delta</li>
              <li>Body: 50% hemp echo</li>
              <li>Outer: 60% modal foxtrot</li>
            </ul>
          </body>
        </html>
    "#;

    let result = extract(html);
    match result {
        Ok(result) => {
            let materials = result.materials.unwrap_or_default();
            assert_eq!(materials.matches(" • ").count(), 3);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn blank_input_is_the_only_error() {
    assert!(matches!(extract(""), Err(Error::EmptyDocument)));
    assert!(matches!(extract("   \n "), Err(Error::EmptyDocument)));
}

#[test]
fn response_record_serializes_to_the_wire_shape() {
    let found = extract(r#"<html><body><li>Fabric: 100% Linen</li></body></html>"#)
        .unwrap_or_default();
    assert_eq!(
        serde_json::to_value(&found).unwrap_or_default(),
        serde_json::json!({
            "materials": "Fabric: 100% Linen",
            "confidence": "high",
            "source": "dom_leaf",
        })
    );

    let missing = extract(r#"<html><body><p>hello</p></body></html>"#).unwrap_or_default();
    assert_eq!(
        serde_json::to_value(&missing).unwrap_or_default(),
        serde_json::json!({ "materials": null, "confidence": "none", "source": "none" })
    );
}
