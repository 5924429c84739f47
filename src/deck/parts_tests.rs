use super::*;

#[test]
fn slide_relationships_follow_fixed_parts() {
    assert_eq!(slide_rel_id(0), "rId6");
    assert_eq!(slide_rel_id(2), "rId8");

    let rels = presentation_rels(2);
    assert!(rels.contains(r#"Id="rId6""#));
    assert!(rels.contains(r#"Target="slides/slide2.xml""#));
    assert!(!rels.contains("slide3.xml"));
}

#[test]
fn presentation_lists_slide_ids_from_256() {
    let xml = presentation(3);
    assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
    assert!(xml.contains(r#"<p:sldId id="258" r:id="rId8"/>"#));
    assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
}

#[test]
fn content_types_override_every_slide() {
    let xml = content_types(2);
    assert_eq!(xml.matches("presentationml.slide+xml").count(), 2);
    assert!(xml.contains(r#"Extension="png""#));
}

#[test]
fn layout_is_title_only() {
    let xml = slide_layout();
    assert!(xml.contains(r#"type="titleOnly""#));
    assert!(xml.contains(r#"<p:cSld name="Title Only">"#));
}

#[test]
fn slide_rels_point_at_own_media() {
    let rels = slide_rels(4);
    assert!(rels.contains("../media/image5.png"));
    assert!(rels.contains("../slideLayouts/slideLayout1.xml"));
}

#[test]
fn master_title_placeholder_geometry() {
    let xml = slide_master();
    assert!(xml.contains(r#"<a:off x="457200" y="274638"/>"#));
    assert!(xml.contains(r#"<a:ext cx="8229600" cy="1143000"/>"#));
}
